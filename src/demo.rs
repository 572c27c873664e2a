//! Fixed demonstration sequence run against an open session.

use std::io::Write;

use anyhow::Context;

use crate::binding::Behavior;
use crate::keycode::Keycode;
use crate::session::StudioSession;

const DEMO_LAYER: u32 = 0;
const DEMO_POSITION: i32 = 0;

/// Runs the demo against `session`, printing progress to `out`.
///
/// The write at layer 0 position 0 only touches the working keymap and is
/// discarded again at the end; nothing is saved.
pub fn run_demo<S: StudioSession + ?Sized>(
    session: &mut S,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let lock_state = session.get_lock_state().context("reading lock state")?;
    writeln!(out, "Lock state: {}", lock_state.as_str_name())?;

    let behaviors = session
        .list_all_behaviors()
        .context("listing behaviors")?;
    writeln!(out, "Behavior count: {}", behaviors.len())?;

    if let Some(&first) = behaviors.first() {
        let details = session
            .get_behavior_details_bytes(first)
            .with_context(|| format!("reading details of behavior {first}"))?;
        writeln!(out, "First behavior details bytes: {}", details.len())?;
    }

    let keymap = session.get_keymap_bytes().context("reading keymap")?;
    writeln!(out, "Keymap bytes: {}", keymap.len())?;

    let layouts = session
        .get_physical_layouts_bytes()
        .context("reading physical layouts")?;
    writeln!(out, "Physical layouts bytes: {}", layouts.len())?;

    let before = session
        .get_key_at(DEMO_LAYER, DEMO_POSITION)
        .context("reading key binding")?;
    writeln!(out, "Before: {}", describe(&before))?;

    session
        .set_key_at(DEMO_LAYER, DEMO_POSITION, Behavior::key_press(Keycode::A))
        .context("writing key binding")?;

    let after = session
        .get_key_at(DEMO_LAYER, DEMO_POSITION)
        .context("re-reading key binding")?;
    writeln!(out, "After: {}", describe(&after))?;

    if session
        .check_unsaved_changes()
        .context("checking unsaved changes")?
    {
        session.discard_changes().context("discarding changes")?;
        writeln!(out, "Discarded changes")?;
    }

    Ok(())
}

fn describe(behavior: &Behavior) -> String {
    format!("{} [{}]", behavior, behavior.kind())
}
