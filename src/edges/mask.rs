//! Index partitions for the compass difference masks.
//!
//! A window of side `n` is linearly indexed row-major `0..n²-1`. Each mask
//! compares the pixel sums of two opposing partitions of the window's outer
//! ring; the four directions are horizontal (top vs bottom row), vertical
//! (left vs right column) and the two diagonals (an L-shaped corner partition
//! vs its point-reflected complement).

/// Square window sides supported by the compass detector.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MaskSize {
    Three,
    Five,
    Seven,
}

/// Opposing index partitions for one window size.
pub struct CompassMask {
    pub size: usize,
    /// (partition a, partition b) per direction; the response is |sum(a) − sum(b)|.
    pub pairs: [(&'static [usize], &'static [usize]); 4],
}

const TOP_3: &[usize] = &[0, 1, 2];
const BOTTOM_3: &[usize] = &[6, 7, 8];
const LEFT_3: &[usize] = &[0, 3, 6];
const RIGHT_3: &[usize] = &[2, 5, 8];
const POS_DIAG_A_3: &[usize] = &[0, 1, 3];
const POS_DIAG_B_3: &[usize] = &[5, 7, 8];
const NEG_DIAG_A_3: &[usize] = &[1, 2, 5];
const NEG_DIAG_B_3: &[usize] = &[3, 6, 7];

const TOP_5: &[usize] = &[0, 1, 2, 3, 4];
const BOTTOM_5: &[usize] = &[20, 21, 22, 23, 24];
const LEFT_5: &[usize] = &[0, 5, 10, 15, 20];
const RIGHT_5: &[usize] = &[4, 9, 14, 19, 24];
const POS_DIAG_A_5: &[usize] = &[0, 1, 2, 5, 10];
const POS_DIAG_B_5: &[usize] = &[14, 19, 22, 23, 24];
const NEG_DIAG_A_5: &[usize] = &[2, 3, 4, 9, 14];
const NEG_DIAG_B_5: &[usize] = &[10, 15, 20, 21, 22];

const TOP_7: &[usize] = &[0, 1, 2, 3, 4, 5, 6];
const BOTTOM_7: &[usize] = &[42, 43, 44, 45, 46, 47, 48];
const LEFT_7: &[usize] = &[0, 7, 14, 21, 28, 35, 42];
const RIGHT_7: &[usize] = &[6, 13, 20, 27, 34, 41, 48];
const POS_DIAG_A_7: &[usize] = &[0, 1, 2, 3, 7, 14, 21];
const POS_DIAG_B_7: &[usize] = &[27, 34, 41, 45, 46, 47, 48];
const NEG_DIAG_A_7: &[usize] = &[3, 4, 5, 6, 13, 20, 27];
const NEG_DIAG_B_7: &[usize] = &[21, 28, 35, 42, 43, 44, 45];

static MASK_3: CompassMask = CompassMask {
    size: 3,
    pairs: [
        (TOP_3, BOTTOM_3),
        (LEFT_3, RIGHT_3),
        (POS_DIAG_A_3, POS_DIAG_B_3),
        (NEG_DIAG_A_3, NEG_DIAG_B_3),
    ],
};

static MASK_5: CompassMask = CompassMask {
    size: 5,
    pairs: [
        (TOP_5, BOTTOM_5),
        (LEFT_5, RIGHT_5),
        (POS_DIAG_A_5, POS_DIAG_B_5),
        (NEG_DIAG_A_5, NEG_DIAG_B_5),
    ],
};

static MASK_7: CompassMask = CompassMask {
    size: 7,
    pairs: [
        (TOP_7, BOTTOM_7),
        (LEFT_7, RIGHT_7),
        (POS_DIAG_A_7, POS_DIAG_B_7),
        (NEG_DIAG_A_7, NEG_DIAG_B_7),
    ],
};

impl MaskSize {
    pub fn mask(self) -> &'static CompassMask {
        match self {
            MaskSize::Three => &MASK_3,
            MaskSize::Five => &MASK_5,
            MaskSize::Seven => &MASK_7,
        }
    }

    /// Window half-width; centers closer than this to a border are skipped.
    pub fn margin(self) -> usize {
        self.mask().size / 2
    }
}
