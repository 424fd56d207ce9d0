use soroban_sdk::contracttype;

/// Position snapshot as stored by the pool
#[contracttype]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Position {
    pub liquidity: u128,
    pub lower_tick_index: i32,
    pub upper_tick_index: i32,
    /// Fee growth inside the range at the last checkpoint
    pub fee_growth_inside_x: u128,
    pub fee_growth_inside_y: u128,
    /// Unclaimed fees, at 10^12
    pub tokens_owed_x: u128,
    pub tokens_owed_y: u128,
}

impl Default for Position {
    fn default() -> Self {
        Self {
            liquidity: 0,
            lower_tick_index: 0,
            upper_tick_index: 0,
            fee_growth_inside_x: 0,
            fee_growth_inside_y: 0,
            tokens_owed_x: 0,
            tokens_owed_y: 0,
        }
    }
}

/// Range and deposit of a position about to be opened
#[contracttype]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PositionInitData {
    pub lower_tick: i32,
    pub upper_tick: i32,
    pub liquidity: u128,
    pub amount_x: u64,
    pub amount_y: u64,
}
