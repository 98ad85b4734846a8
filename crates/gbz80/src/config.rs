use typed_builder::TypedBuilder;

pub use crate::cpu::BootProfile;
pub use crate::memory::MapperKind;

/// Everything needed to construct a [`Machine`](crate::Machine).
///
/// ```
/// use gbz80::{MachineConfig, MapperKind};
///
/// let config = MachineConfig::builder()
///     .rom(vec![0x00; 0x8000])
///     .mapper(MapperKind::RomOnly)
///     .build();
/// assert_eq!(config.entry_point, 0x0100);
/// ```
#[derive(TypedBuilder, Clone, Debug)]
pub struct MachineConfig {
    pub rom: Vec<u8>,
    #[builder(default = 0x0100)]
    pub entry_point: u16,
    #[builder(default = BootProfile::Dmg)]
    pub boot: BootProfile,
    #[builder(default = MapperKind::Mbc1)]
    pub mapper: MapperKind,
    /// External RAM banks (8 KiB each) behind an MBC1.
    #[builder(default = 0)]
    pub ram_banks: u8,
}
