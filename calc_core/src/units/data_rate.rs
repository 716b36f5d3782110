//! Data-transfer rate units. Base: bit per second.
//!
//! Decimal prefixes (k = 10³) for bit and byte rates; binary prefixes
//! (Ki = 2¹⁰) for the KiB/MiB/GiB rates.

const BYTE: f64 = 8.0;

unit_table! {
    /// Data-transfer rate units (base: bit per second)
    DataRate, quantity = "data rate", base = BitPerSecond;
    BitPerSecond => ("bit/s", "Bit per second", 1.0, ["bps", "b/s"]),
    KilobitPerSecond => ("kbit/s", "Kilobit per second", 1e3, ["kbps", "kb/s"]),
    MegabitPerSecond => ("Mbit/s", "Megabit per second", 1e6, ["Mbps", "Mb/s"]),
    GigabitPerSecond => ("Gbit/s", "Gigabit per second", 1e9, ["Gbps", "Gb/s"]),
    TerabitPerSecond => ("Tbit/s", "Terabit per second", 1e12, ["Tbps", "Tb/s"]),
    BytePerSecond => ("B/s", "Byte per second", BYTE, ["Bps"]),
    KilobytePerSecond => ("kB/s", "Kilobyte per second", BYTE * 1e3, ["KB/s", "kBps"]),
    MegabytePerSecond => ("MB/s", "Megabyte per second", BYTE * 1e6, ["MBps"]),
    GigabytePerSecond => ("GB/s", "Gigabyte per second", BYTE * 1e9, ["GBps"]),
    KibibytePerSecond => ("KiB/s", "Kibibyte per second", BYTE * 1024.0, []),
    MebibytePerSecond => ("MiB/s", "Mebibyte per second", BYTE * 1_048_576.0, []),
    GibibytePerSecond => ("GiB/s", "Gibibyte per second", BYTE * 1_073_741_824.0, []),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::convert;
    use approx::assert_relative_eq;

    #[test]
    fn test_megabit_to_megabyte() {
        assert_relative_eq!(convert(100.0, DataRate::MegabitPerSecond, DataRate::MegabytePerSecond), 12.5, epsilon = 1e-12);
    }

    #[test]
    fn test_binary_prefix() {
        assert_relative_eq!(convert(1.0, DataRate::MebibytePerSecond, DataRate::KibibytePerSecond), 1024.0, epsilon = 1e-9);
    }

    #[test]
    fn test_gigabit_to_bits() {
        assert_relative_eq!(convert(1.0, DataRate::GigabitPerSecond, DataRate::BitPerSecond), 1e9, epsilon = 1e-3);
    }
}
