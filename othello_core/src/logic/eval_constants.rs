// Per-disc weights for the positional evaluator.
pub const CORNER_SCORE: i32 = 22;
pub const STABLE_SCORE: i32 = 12;
pub const C_SQUARE_SCORE: i32 = -12;
pub const X_SQUARE_SCORE: i32 = -22;
pub const REGULAR_SCORE: i32 = 1;

// Weight of one legal move of mobility difference.
pub const MOBILITY_WEIGHT: i32 = 1;

/// Score for a decided game won by the first player.
pub const FIRST_PLAYER_WINS: i32 = i32::MAX;
/// Score for a decided game won by the second player.
pub const SECOND_PLAYER_WINS: i32 = i32::MIN;
/// Score for a decided game with equal disc counts.
pub const DRAWN_GAME: i32 = 0;
