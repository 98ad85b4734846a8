/// Abstraction over the Game Boy bus (memory and IO).
///
/// Reads take `&mut self` because a read may have side effects on a
/// memory-mapped peripheral.
pub trait Bus {
    fn read8(&mut self, addr: u16) -> u8;
    fn write8(&mut self, addr: u16, value: u8);

    /// Advance bus-side peripherals by a given number of CPU T-cycles.
    ///
    /// Called once per executed instruction (or interrupt entry, or idle
    /// HALT slot) with its full cost. Default implementation does nothing.
    fn tick(&mut self, _cycles: u32) {}
}
