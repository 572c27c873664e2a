//! Command-line interface definitions.

use std::io::Write;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::demo::run_demo;
use crate::session::Connector;

/// Command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "zmk-studio-demo")]
#[command(about = "Exercise a ZMK Studio device over serial or BLE", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Transport selection.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Connect over a USB serial port
    Serial {
        /// Serial port (e.g., /dev/ttyACM0 or COM3)
        #[arg(value_name = "PORT")]
        port: String,
    },

    /// Connect to the first ZMK Studio peripheral found over BLE
    Ble,
}

/// Opens a session for the parsed command and runs the demo on it.
pub fn run<C: Connector>(cli: Cli, connector: &C, out: &mut impl Write) -> Result<()> {
    let mut session = match &cli.command {
        Commands::Serial { port } => connector
            .open_serial(port)
            .with_context(|| format!("opening serial port {port}"))?,
        Commands::Ble => connector.connect_ble().context("connecting over BLE")?,
    };

    run_demo(&mut session, out)
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::demo::tests::RecordingSession;
    use crate::transport::ConnectError;

    #[derive(Debug, PartialEq)]
    enum Opened {
        Serial(String),
        Ble,
    }

    #[derive(Default)]
    struct FakeConnector {
        opened: RefCell<Vec<Opened>>,
        refuse: bool,
        fail_on: Option<&'static str>,
    }

    impl FakeConnector {
        fn session(&self) -> Result<RecordingSession, ConnectError> {
            if self.refuse {
                return Err(ConnectError::Unsupported("test"));
            }
            let mut session = RecordingSession::new();
            session.fail_on = self.fail_on;
            Ok(session)
        }
    }

    impl Connector for FakeConnector {
        type Session = RecordingSession;

        fn open_serial(&self, port: &str) -> Result<Self::Session, ConnectError> {
            self.opened.borrow_mut().push(Opened::Serial(port.to_string()));
            self.session()
        }

        fn connect_ble(&self) -> Result<Self::Session, ConnectError> {
            self.opened.borrow_mut().push(Opened::Ble);
            self.session()
        }
    }

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn serial_uses_the_given_port() {
        let connector = FakeConnector::default();
        let mut out = Vec::new();
        run(parse(&["zmk-studio-demo", "serial", "/dev/ttyACM0"]), &connector, &mut out).unwrap();

        assert_eq!(
            *connector.opened.borrow(),
            vec![Opened::Serial("/dev/ttyACM0".to_string())]
        );
        assert!(String::from_utf8(out).unwrap().starts_with("Lock state: "));
    }

    #[test]
    fn ble_takes_no_arguments() {
        let connector = FakeConnector::default();
        run(parse(&["zmk-studio-demo", "ble"]), &connector, &mut Vec::<u8>::new()).unwrap();
        assert_eq!(*connector.opened.borrow(), vec![Opened::Ble]);

        assert!(Cli::try_parse_from(["zmk-studio-demo", "ble", "extra"]).is_err());
    }

    #[test]
    fn serial_requires_a_port() {
        let err = Cli::try_parse_from(["zmk-studio-demo", "serial"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn a_subcommand_is_required() {
        assert!(Cli::try_parse_from(["zmk-studio-demo"]).is_err());
        assert!(Cli::try_parse_from(["zmk-studio-demo", "usb"]).is_err());
    }

    #[test]
    fn connection_failure_is_reported_with_context() {
        let connector = FakeConnector {
            refuse: true,
            ..Default::default()
        };
        let err = run(parse(&["zmk-studio-demo", "serial", "COM3"]), &connector, &mut Vec::<u8>::new())
            .unwrap_err();

        assert_eq!(err.to_string(), "opening serial port COM3");
        assert!(err.downcast_ref::<ConnectError>().is_some());
    }

    #[test]
    fn session_errors_propagate() {
        let connector = FakeConnector {
            fail_on: Some("get_keymap_bytes"),
            ..Default::default()
        };
        let mut out = Vec::new();
        let err = run(parse(&["zmk-studio-demo", "ble"]), &connector, &mut out).unwrap_err();

        assert_eq!(err.to_string(), "reading keymap");
        let output = String::from_utf8(out).unwrap();
        assert!(!output.contains("Keymap bytes"));
        assert!(!output.contains("Before:"));
    }

    #[test]
    fn demo_runs_to_discard() {
        let connector = FakeConnector::default();
        let mut out = Vec::new();
        run(parse(&["zmk-studio-demo", "ble"]), &connector, &mut out).unwrap();
        assert!(String::from_utf8(out).unwrap().ends_with("Discarded changes\n"));
    }
}
