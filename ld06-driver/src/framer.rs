use crate::constants::{PACKET_HEADER, PACKET_SIZE, PACKET_VERLEN};

/// One candidate scan packet as received from the sensor.
pub type Packet = [u8; PACKET_SIZE];

/// Incremental framer that cuts an unsynchronized byte stream into 47-byte
/// candidate packets.
///
/// A packet starts at a `0x54` header byte followed by the `0x2C` ver/len byte.
/// When the second byte is wrong the partial packet is dropped and that byte is
/// not considered as a new header. Emitted packets are not checksum-validated.
#[derive(Debug, Clone)]
pub struct Framer {
    buffer: Packet,
    index: usize,
    in_packet: bool,
}

impl Framer {
    pub fn new() -> Framer {
        Framer {
            buffer: [0; PACKET_SIZE],
            index: 0,
            in_packet: false,
        }
    }

    /// Consumes one byte. Returns a packet when this byte completed one.
    pub fn push(&mut self, byte: u8) -> Option<Packet> {
        if !self.in_packet {
            if byte == PACKET_HEADER {
                self.buffer[0] = byte;
                self.index = 1;
                self.in_packet = true;
            }
            return None;
        }

        self.buffer[self.index] = byte;
        self.index += 1;

        if self.index == 2 && byte != PACKET_VERLEN {
            self.reset();
            return None;
        }

        if self.index >= PACKET_SIZE {
            self.reset();
            return Some(self.buffer);
        }
        None
    }

    /// Lazily feeds `bytes` through the framer, yielding every completed packet.
    pub fn frames<'a, I>(&'a mut self, bytes: I) -> impl Iterator<Item = Packet> + 'a
    where
        I: IntoIterator<Item = u8>,
        I::IntoIter: 'a,
    {
        bytes.into_iter().filter_map(move |b| self.push(b))
    }

    pub fn is_synchronized(&self) -> bool {
        self.in_packet
    }

    /// Number of bytes of the packet currently being accumulated.
    pub fn buffered(&self) -> usize {
        self.index
    }

    fn reset(&mut self) {
        self.in_packet = false;
        self.index = 0;
    }
}

impl Default for Framer {
    fn default() -> Self {
        Framer::new()
    }
}
