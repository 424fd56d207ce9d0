// Protocol constants for the Tidal math core
//
// Every fixed-point quantity is a plain integer scaled by a power of ten
// that depends on what it measures. Keep the groups below in sync with the
// settlement engine; the simulator mirrors it bit-for-bit.

// ============================================================
// FIXED-POINT SCALES
// ============================================================

/// Decimal places of percentages and fee rates
pub const DECIMAL: u32 = 12;

/// Decimal places of sqrt prices
pub const PRICE_SCALE: u32 = 24;

/// Decimal places of liquidity
pub const LIQUIDITY_SCALE: u32 = 6;

/// Decimal places of fee growth accumulators
pub const GROWTH_SCALE: u32 = 24;

/// Decimal places of fee tier inputs (1 = 0.001%)
pub const FEE_DECIMAL: u32 = 5;

/// 1.0 as a percentage (10^12)
pub const DENOMINATOR: u128 = 1_000_000_000_000;

/// 1.0 as a sqrt price (10^24)
pub const PRICE_DENOMINATOR: u128 = 1_000_000_000_000_000_000_000_000;

/// 1.0 as liquidity (10^6)
pub const LIQUIDITY_DENOMINATOR: u128 = 1_000_000;

/// 1.0 as fee growth (10^24)
pub const GROWTH_DENOMINATOR: u128 = 1_000_000_000_000_000_000_000_000;

/// PRICE_DENOMINATOR / LIQUIDITY_DENOMINATOR
/// Rescales liquidity to price precision in the x-side curve formulas
pub const LIQUIDITY_TO_PRICE: u128 = 1_000_000_000_000_000_000;

/// PRICE_DENOMINATOR * LIQUIDITY_DENOMINATOR
/// Divides a (price delta * liquidity) product down to whole tokens
pub const PRICE_LIQUIDITY_DENOMINATOR: u128 = 1_000_000_000_000_000_000_000_000_000_000;

/// 10^(DECIMAL + LIQUIDITY_SCALE)
/// Divides (liquidity * fee growth) down to DENOMINATOR-scaled token amounts
pub const OWED_DENOMINATOR: u128 = 1_000_000_000_000_000_000;

/// Fee growth and seconds-per-liquidity wrap at 2^128
pub const U128MAX: u128 = u128::MAX;

// ============================================================
// TICK CONSTANTS
// ============================================================

/// Highest tick with a representable sqrt price
pub const MAX_TICK: i32 = 221_818;

/// Lowest tick with a representable sqrt price
pub const MIN_TICK: i32 = -MAX_TICK;

/// Grid indices (tick / spacing) must lie strictly inside ±TICK_LIMIT
pub const TICK_LIMIT: i32 = 44_364;

/// Maximum bitmap search distance, in grid steps
pub const TICK_SEARCH_RANGE: i32 = 256;

/// Bits in the tickmap
pub const TICKMAP_SIZE: i32 = 2 * TICK_LIMIT - 1;

/// Bytes in the tickmap
pub const TICKMAP_BYTES: usize = 11_091;

// ============================================================
// FEE TIERS
// ============================================================

/// Multiplier from FEE_DECIMAL fee inputs to DENOMINATOR-scaled rates
pub const FEE_OFFSET: u128 = 10_000_000;

/// Divisor from a fee rate to its default tick spacing
pub const FEE_TO_SPACING_OFFSET: u128 = 100_000_000;

/// Standard fee tiers in FEE_DECIMAL units: 0.01%, 0.05%, 0.1%, 0.3%, 1%
pub const FEE_TIER_INPUTS: [u128; 5] = [10, 50, 100, 300, 1000];

// ============================================================
// ANALYTICS
// ============================================================

/// Share of swap fees kept by the protocol
pub const PROTOCOL_FEE: f64 = 0.01;

/// Divisor turning a fee rate into a percentage figure (10^(DECIMAL - 2))
pub const FEE_TIER_DENOMINATOR: f64 = 10_000_000_000.0;

/// Correction applied to position concentration figures
pub const CONCENTRATION_FACTOR: f64 = 1.00001526069123;
