use std::ops::RangeInclusive;

/// A memory-mapped backing store or peripheral.
///
/// Addresses passed to `read`/`write` are absolute bus addresses inside
/// the [`Region`] the device is attached to.
pub trait Device {
    fn read(&mut self, addr: u16) -> u8;
    fn write(&mut self, addr: u16, value: u8);

    /// Advance the device by `cycles` T-cycles. Default implementation
    /// does nothing.
    fn tick(&mut self, _cycles: u32) {}
}

/// Bus regions that can be backed by a [`Device`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Region {
    VideoRam,
    WorkRam,
    Oam,
    Io,
    HighRam,
}

impl Region {
    pub const ALL: [Region; 5] = [
        Region::VideoRam,
        Region::WorkRam,
        Region::Oam,
        Region::Io,
        Region::HighRam,
    ];

    pub const fn range(self) -> RangeInclusive<u16> {
        match self {
            Region::VideoRam => 0x8000..=0x9FFF,
            Region::WorkRam => 0xC000..=0xDFFF,
            Region::Oam => 0xFE00..=0xFE9F,
            Region::Io => 0xFF00..=0xFF7F,
            Region::HighRam => 0xFF80..=0xFFFE,
        }
    }

    #[inline]
    pub(super) const fn slot(self) -> usize {
        self as usize
    }
}

/// Plain read/write memory covering one region.
#[derive(Clone, Debug)]
pub struct Ram {
    base: u16,
    data: Vec<u8>,
}

impl Ram {
    pub fn new(region: Region) -> Self {
        let range = region.range();
        let len = (*range.end() - *range.start()) as usize + 1;
        Self {
            base: *range.start(),
            data: vec![0; len],
        }
    }
}

impl Device for Ram {
    fn read(&mut self, addr: u16) -> u8 {
        let index = addr.wrapping_sub(self.base) as usize;
        self.data.get(index).copied().unwrap_or(0xFF)
    }

    fn write(&mut self, addr: u16, value: u8) {
        let index = addr.wrapping_sub(self.base) as usize;
        if let Some(slot) = self.data.get_mut(index) {
            *slot = value;
        }
    }
}
