use std::io::{Read, Write};
use std::time::Duration;

/// Port settings for [`SerialTransport::open_with_options`].
///
/// ZMK Studio's CDC-ACM endpoint ignores the baud rate, but some host
/// drivers refuse to open a port without one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SerialOptions {
    pub baud_rate: u32,
    pub timeout: Duration,
}

impl Default for SerialOptions {
    fn default() -> Self {
        Self {
            baud_rate: 12_500,
            timeout: Duration::from_millis(500),
        }
    }
}

#[derive(Debug)]
pub struct SerialTransportError {
    path: String,
    source: serialport::Error,
}

impl SerialTransportError {
    pub fn path(&self) -> &str {
        &self.path
    }
}

impl std::fmt::Display for SerialTransportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to open serial port {}: {}", self.path, self.source)
    }
}

impl std::error::Error for SerialTransportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

/// Blocking byte stream over a USB serial port.
pub struct SerialTransport {
    inner: Box<dyn serialport::SerialPort>,
}

impl SerialTransport {
    pub fn open(path: &str) -> Result<Self, SerialTransportError> {
        Self::open_with_options(path, SerialOptions::default())
    }

    pub fn open_with_options(
        path: &str,
        options: SerialOptions,
    ) -> Result<Self, SerialTransportError> {
        log::debug!(
            "opening serial port {path} at {} baud, timeout {:?}",
            options.baud_rate,
            options.timeout
        );
        let port = serialport::new(path, options.baud_rate)
            .timeout(options.timeout)
            .open()
            .map_err(|source| SerialTransportError {
                path: path.to_string(),
                source,
            })?;
        Ok(Self { inner: port })
    }
}

impl Read for SerialTransport {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        self.inner.read(buf)
    }
}

impl Write for SerialTransport {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.inner.write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.inner.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options() {
        let options = SerialOptions::default();
        assert_eq!(options.baud_rate, 12_500);
        assert_eq!(options.timeout, Duration::from_millis(500));
    }

    #[test]
    fn missing_port_names_the_path() {
        let err = match SerialTransport::open("/dev/zmk-studio-does-not-exist") {
            Ok(_) => panic!("port should not exist"),
            Err(err) => err,
        };
        assert_eq!(err.path(), "/dev/zmk-studio-does-not-exist");
        assert!(err.to_string().contains("/dev/zmk-studio-does-not-exist"));
    }
}
