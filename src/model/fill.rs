/// Amounts an operator adds to the machine during a refill.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FillRequest {
    pub water: u32,
    pub milk: u32,
    pub beans: u32,
    pub cups: u32,
}

impl FillRequest {
    pub fn new(water: u32, milk: u32, beans: u32, cups: u32) -> Self {
        Self {
            water,
            milk,
            beans,
            cups,
        }
    }
}
