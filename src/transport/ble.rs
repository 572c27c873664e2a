use std::collections::VecDeque;
use std::io::{Read, Write};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use btleplug::api::{
    Central, CharPropFlags, Characteristic, Manager as _, Peripheral as _, ScanFilter, WriteType,
};
use btleplug::platform::{Adapter, Manager, Peripheral};
use futures::StreamExt;
use tokio::runtime::Runtime;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};
use uuid::Uuid;

/// GATT service advertised by ZMK Studio capable firmware.
pub const BLE_SERVICE_UUID: Uuid = Uuid::from_u128(0x00000000_0196_6107_c967_c5cfb1c2482a);
/// Characteristic carrying framed RPC traffic in both directions.
pub const BLE_RPC_CHARACTERISTIC_UUID: Uuid =
    Uuid::from_u128(0x00000001_0196_6107_c967_c5cfb1c2482a);

/// Scan and session settings for [`BleTransport::connect_with_options`].
#[derive(Debug, Clone)]
pub struct BleConnectOptions {
    /// How long to scan before picking a peripheral.
    pub scan_timeout: Duration,
    /// How long a blocking read waits for a notification.
    pub read_timeout: Duration,
    /// Only accept peripherals whose advertised name contains this.
    pub name_contains: Option<String>,
    /// Only accept the peripheral with this platform id, as reported by
    /// [`discover_devices`].
    pub device_id: Option<String>,
}

impl Default for BleConnectOptions {
    fn default() -> Self {
        Self {
            scan_timeout: Duration::from_secs(5),
            read_timeout: Duration::from_secs(5),
            name_contains: None,
            device_id: None,
        }
    }
}

/// A ZMK Studio peripheral seen during a scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BleDeviceInfo {
    pub device_id: String,
    pub local_name: Option<String>,
}

impl BleDeviceInfo {
    /// `name [id]`, or just the id for unnamed peripherals.
    pub fn display_name(&self) -> String {
        match self.local_name.as_deref() {
            Some(name) if !name.is_empty() => format!("{name} [{}]", self.device_id),
            _ => self.device_id.clone(),
        }
    }
}

/// Scans for five seconds and lists every peripheral advertising the ZMK Studio service.
pub fn discover_devices() -> Result<Vec<BleDeviceInfo>, BleTransportError> {
    discover_devices_with_timeout(BleConnectOptions::default().scan_timeout)
}

pub fn discover_devices_with_timeout(
    scan_timeout: Duration,
) -> Result<Vec<BleDeviceInfo>, BleTransportError> {
    let runtime = Runtime::new().map_err(BleTransportError::Worker)?;
    runtime.block_on(async {
        let adapter = first_adapter().await?;
        adapter
            .start_scan(ScanFilter {
                services: vec![BLE_SERVICE_UUID],
            })
            .await?;
        tokio::time::sleep(scan_timeout).await;

        let mut devices = Vec::new();
        for peripheral in adapter.peripherals().await? {
            let Some(props) = peripheral.properties().await? else {
                continue;
            };
            if props.services.contains(&BLE_SERVICE_UUID) {
                devices.push(BleDeviceInfo {
                    device_id: peripheral.id().to_string(),
                    local_name: props.local_name,
                });
            }
        }
        if let Err(err) = adapter.stop_scan().await {
            log::debug!("stop_scan failed: {err}");
        }

        log::debug!("discovered {} ZMK Studio peripherals", devices.len());
        Ok(devices)
    })
}

#[derive(Debug)]
pub enum BleTransportError {
    Worker(std::io::Error),
    Btleplug(btleplug::Error),
    NoAdapter,
    NoMatchingPeripheral,
    DeviceNotFound(String),
    MissingRpcCharacteristic,
    WorkerExited,
}

impl std::fmt::Display for BleTransportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Worker(err) => write!(f, "Failed to start BLE worker: {err}"),
            Self::Btleplug(err) => write!(f, "BLE error: {err}"),
            Self::NoAdapter => write!(f, "No Bluetooth adapter available"),
            Self::NoMatchingPeripheral => write!(f, "No ZMK Studio peripheral found"),
            Self::DeviceNotFound(id) => write!(f, "BLE device {id} not found"),
            Self::MissingRpcCharacteristic => {
                write!(f, "Peripheral does not expose the ZMK Studio RPC characteristic")
            }
            Self::WorkerExited => write!(f, "BLE worker exited before the link was ready"),
        }
    }
}

impl std::error::Error for BleTransportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Worker(err) => Some(err),
            Self::Btleplug(err) => Some(err),
            _ => None,
        }
    }
}

impl From<btleplug::Error> for BleTransportError {
    fn from(value: btleplug::Error) -> Self {
        Self::Btleplug(value)
    }
}

/// Blocking byte stream over the ZMK Studio GATT characteristic.
///
/// A background thread owns a tokio runtime and the connected peripheral.
/// Writes are forwarded to it and notifications come back over a channel.
pub struct BleTransport {
    outgoing: UnboundedSender<Vec<u8>>,
    incoming: mpsc::Receiver<Vec<u8>>,
    pending: VecDeque<u8>,
    read_timeout: Duration,
}

impl BleTransport {
    pub fn connect_first() -> Result<Self, BleTransportError> {
        Self::connect_with_options(BleConnectOptions::default())
    }

    /// Connects to a peripheral returned by [`discover_devices`].
    pub fn connect_device(device_id: impl Into<String>) -> Result<Self, BleTransportError> {
        Self::connect_with_options(BleConnectOptions {
            device_id: Some(device_id.into()),
            ..Default::default()
        })
    }

    pub fn connect_with_options(options: BleConnectOptions) -> Result<Self, BleTransportError> {
        let read_timeout = options.read_timeout;
        let (outgoing, outgoing_rx) = tokio::sync::mpsc::unbounded_channel();
        let (incoming_tx, incoming) = mpsc::channel();
        let (ready_tx, ready_rx) = mpsc::channel();

        log::debug!("scanning for ZMK Studio peripherals for {:?}", options.scan_timeout);
        thread::Builder::new()
            .name("zmk-studio-ble".into())
            .spawn(move || {
                let runtime = match Runtime::new() {
                    Ok(runtime) => runtime,
                    Err(err) => {
                        let _ = ready_tx.send(Err(BleTransportError::Worker(err)));
                        return;
                    }
                };
                runtime.block_on(async move {
                    let link = match GattLink::open(&options).await {
                        Ok(link) => link,
                        Err(err) => {
                            let _ = ready_tx.send(Err(err));
                            return;
                        }
                    };
                    let _ = ready_tx.send(Ok(()));
                    if let Err(err) = link.pump(outgoing_rx, incoming_tx).await {
                        log::warn!("BLE link closed with error: {err}");
                    }
                });
            })
            .map_err(BleTransportError::Worker)?;

        ready_rx.recv().map_err(|_| BleTransportError::WorkerExited)??;

        Ok(Self {
            outgoing,
            incoming,
            pending: VecDeque::new(),
            read_timeout,
        })
    }
}

impl Read for BleTransport {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        if buf.is_empty() {
            return Ok(0);
        }

        if self.pending.is_empty() {
            let packet = self.incoming.recv_timeout(self.read_timeout).map_err(|err| {
                use std::io::{Error, ErrorKind};
                match err {
                    mpsc::RecvTimeoutError::Timeout => {
                        Error::new(ErrorKind::TimedOut, "Timed out waiting for BLE data")
                    }
                    mpsc::RecvTimeoutError::Disconnected => {
                        Error::new(ErrorKind::UnexpectedEof, "BLE link disconnected")
                    }
                }
            })?;
            self.pending.extend(packet);
        }

        let n = buf.len().min(self.pending.len());
        for (slot, byte) in buf.iter_mut().zip(self.pending.drain(..n)) {
            *slot = byte;
        }
        Ok(n)
    }
}

impl Write for BleTransport {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.outgoing.send(buf.to_vec()).map_err(|_| {
            std::io::Error::new(std::io::ErrorKind::BrokenPipe, "BLE worker is not running")
        })?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// Connected peripheral and the subscribed RPC characteristic.
struct GattLink {
    peripheral: Peripheral,
    rpc: Characteristic,
    write_type: WriteType,
}

impl GattLink {
    async fn open(options: &BleConnectOptions) -> Result<Self, BleTransportError> {
        let adapter = first_adapter().await?;
        adapter
            .start_scan(ScanFilter {
                services: vec![BLE_SERVICE_UUID],
            })
            .await?;
        tokio::time::sleep(options.scan_timeout).await;
        let found = find_peripheral(&adapter, options).await;
        if let Err(err) = adapter.stop_scan().await {
            log::debug!("stop_scan failed: {err}");
        }
        let peripheral = found?;

        peripheral.connect().await?;
        peripheral.discover_services().await?;
        let rpc = peripheral
            .characteristics()
            .into_iter()
            .find(|ch| ch.uuid == BLE_RPC_CHARACTERISTIC_UUID)
            .ok_or(BleTransportError::MissingRpcCharacteristic)?;
        peripheral.subscribe(&rpc).await?;
        log::debug!("subscribed to RPC characteristic {}", rpc.uuid);

        let write_type = if rpc.properties.contains(CharPropFlags::WRITE_WITHOUT_RESPONSE) {
            WriteType::WithoutResponse
        } else {
            WriteType::WithResponse
        };

        Ok(Self {
            peripheral,
            rpc,
            write_type,
        })
    }

    /// Shuttles bytes until either side hangs up.
    async fn pump(
        self,
        mut outgoing: UnboundedReceiver<Vec<u8>>,
        incoming: mpsc::Sender<Vec<u8>>,
    ) -> Result<(), BleTransportError> {
        let mut notifications = self.peripheral.notifications().await?;

        let result = loop {
            tokio::select! {
                notification = notifications.next() => {
                    let Some(notification) = notification else {
                        break Ok(());
                    };
                    if notification.uuid != self.rpc.uuid {
                        continue;
                    }
                    log::trace!("BLE notification of {} bytes", notification.value.len());
                    if incoming.send(notification.value).is_err() {
                        break Ok(());
                    }
                }
                data = outgoing.recv() => {
                    let Some(data) = data else {
                        break Ok(());
                    };
                    if let Err(err) = self.peripheral.write(&self.rpc, &data, self.write_type).await {
                        break Err(err.into());
                    }
                }
            }
        };

        let _ = self.peripheral.disconnect().await;
        result
    }
}

async fn first_adapter() -> Result<Adapter, BleTransportError> {
    let manager = Manager::new().await?;
    manager
        .adapters()
        .await?
        .into_iter()
        .next()
        .ok_or(BleTransportError::NoAdapter)
}

async fn find_peripheral(
    adapter: &Adapter,
    options: &BleConnectOptions,
) -> Result<Peripheral, BleTransportError> {
    for peripheral in adapter.peripherals().await? {
        if !id_matches(&peripheral.id().to_string(), options.device_id.as_deref()) {
            continue;
        }
        let Some(props) = peripheral.properties().await? else {
            continue;
        };
        if props.services.contains(&BLE_SERVICE_UUID)
            && name_matches(props.local_name.as_deref(), options.name_contains.as_deref())
        {
            log::debug!("selected peripheral {:?}", props.local_name);
            return Ok(peripheral);
        }
    }

    Err(match &options.device_id {
        Some(id) => BleTransportError::DeviceNotFound(id.clone()),
        None => BleTransportError::NoMatchingPeripheral,
    })
}

fn id_matches(id: &str, wanted: Option<&str>) -> bool {
    wanted.is_none_or(|wanted| wanted == id)
}

fn name_matches(local_name: Option<&str>, filter: Option<&str>) -> bool {
    match (filter, local_name) {
        (None, _) => true,
        (Some(needle), Some(name)) => name.contains(needle),
        (Some(_), None) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uuids_match_zmk_studio() {
        assert_eq!(
            BLE_SERVICE_UUID.to_string(),
            "00000000-0196-6107-c967-c5cfb1c2482a"
        );
        assert_eq!(
            BLE_RPC_CHARACTERISTIC_UUID.to_string(),
            "00000001-0196-6107-c967-c5cfb1c2482a"
        );
    }

    #[test]
    fn default_options_use_five_second_timeouts() {
        let options = BleConnectOptions::default();
        assert_eq!(options.scan_timeout, Duration::from_secs(5));
        assert_eq!(options.read_timeout, Duration::from_secs(5));
        assert!(options.name_contains.is_none());
        assert!(options.device_id.is_none());
    }

    #[test]
    fn device_id_filter() {
        assert!(id_matches("hci0/dev_AA_BB", None));
        assert!(id_matches("hci0/dev_AA_BB", Some("hci0/dev_AA_BB")));
        assert!(!id_matches("hci0/dev_AA_BB", Some("hci0/dev_CC_DD")));
    }

    #[test]
    fn display_name_falls_back_to_id() {
        let mut device = BleDeviceInfo {
            device_id: "hci0/dev_AA_BB".to_string(),
            local_name: Some("Corne".to_string()),
        };
        assert_eq!(device.display_name(), "Corne [hci0/dev_AA_BB]");

        device.local_name = Some(String::new());
        assert_eq!(device.display_name(), "hci0/dev_AA_BB");
        device.local_name = None;
        assert_eq!(device.display_name(), "hci0/dev_AA_BB");
    }

    #[test]
    fn missing_device_names_the_id() {
        let err = BleTransportError::DeviceNotFound("hci0/dev_AA_BB".to_string());
        assert_eq!(err.to_string(), "BLE device hci0/dev_AA_BB not found");
    }

    #[test]
    fn name_filter() {
        assert!(name_matches(Some("Corne"), None));
        assert!(name_matches(None, None));
        assert!(name_matches(Some("Corne Left"), Some("Corne")));
        assert!(!name_matches(Some("Lily58"), Some("Corne")));
        assert!(!name_matches(None, Some("Corne")));
    }
}
