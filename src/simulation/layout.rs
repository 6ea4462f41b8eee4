use crate::math::{Point, Real, Vector};
use crate::shape::Peg;

/// The points won by a ball landing in each bin, from left to right.
pub const SCORE_BINS: [u32; 5] = [100, 50, 10, 50, 100];

/// Distance between the bottom of the board and the top of the floor slab.
const FLOOR_OFFSET: Real = 40.0;

/// Error raised when a [`PegBoardConfig`] cannot describe a valid board.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq)]
pub enum LayoutError {
    /// The board must have at least one row of pegs.
    #[error("a peg board must have at least one row.")]
    NoRows,
    /// Every row must have at least one peg.
    #[error("a peg board must have at least one peg per row.")]
    NoColumns,
    /// The board width and height must be positive.
    #[error("the board size {width}x{height} is not positive.")]
    NonPositiveBoardSize {
        /// The configured board width.
        width: Real,
        /// The configured board height.
        height: Real,
    },
    /// The peg half-extents must not be negative.
    #[error("the peg half-extents {0:?} have a negative component.")]
    NegativePegSize(Vector<Real>),
    /// Every length and angle of the layout must be finite.
    #[error("the layout parameter `{0}` is not finite.")]
    NonFiniteParameter(&'static str),
}

/// Parameters of a [`PegBoard`].
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct PegBoardConfig {
    /// The board width.
    pub width: Real,
    /// The board height, growing downwards.
    pub height: Real,
    /// The number of rows of pegs.
    pub rows: usize,
    /// The number of pegs on each row.
    pub pegs_per_row: usize,
    /// The half-extents shared by every peg. The floor slab uses its height.
    pub peg_half_extents: Vector<Real>,
    /// The vertical coordinate of the first row.
    pub first_row_y: Real,
    /// The vertical distance between two consecutive rows.
    pub row_spacing: Real,
    /// If `true`, every peg except the floor is rotated by `rotation_deg`.
    pub rotated: bool,
    /// The rotation, in degrees, applied to the pegs of a rotated board.
    pub rotation_deg: Real,
}

impl Default for PegBoardConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 900.0,
            rows: 10,
            pegs_per_row: 12,
            peg_half_extents: Vector::new(10.0, 10.0),
            first_row_y: 150.0,
            row_spacing: 60.0,
            rotated: false,
            rotation_deg: 45.0,
        }
    }
}

impl PegBoardConfig {
    fn validate(&self) -> Result<(), LayoutError> {
        if self.rows == 0 {
            return Err(LayoutError::NoRows);
        }

        if self.pegs_per_row == 0 {
            return Err(LayoutError::NoColumns);
        }

        // Written so that NaN sizes are rejected too.
        if !(self.width > 0.0 && self.height > 0.0) {
            return Err(LayoutError::NonPositiveBoardSize {
                width: self.width,
                height: self.height,
            });
        }

        if !(self.peg_half_extents.x >= 0.0 && self.peg_half_extents.y >= 0.0) {
            return Err(LayoutError::NegativePegSize(self.peg_half_extents));
        }

        let finite_parameters = [
            ("width", self.width.is_finite()),
            ("height", self.height.is_finite()),
            (
                "peg_half_extents",
                self.peg_half_extents.iter().all(|x| x.is_finite()),
            ),
            ("first_row_y", self.first_row_y.is_finite()),
            ("row_spacing", self.row_spacing.is_finite()),
            ("rotation_deg", self.rotation_deg.is_finite()),
        ];

        match finite_parameters.iter().find(|(_, finite)| !finite) {
            Some((name, _)) => Err(LayoutError::NonFiniteParameter(*name)),
            None => Ok(()),
        }
    }
}

/// Staggered rows of pegs above a floor slab.
///
/// Pegs are stored row by row, left to right, and the floor slab comes last.
/// Peg indices reported by the collision pipeline index into [`PegBoard::pegs`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct PegBoard {
    config: PegBoardConfig,
    pegs: Vec<Peg>,
}

impl PegBoard {
    /// Lays out the pegs described by `config`.
    ///
    /// Odd rows are shifted right by half a column.
    pub fn new(config: PegBoardConfig) -> Result<Self, LayoutError> {
        config.validate()?;

        let column_spacing = config.width / (config.pegs_per_row as Real + 1.0);
        let rotation_deg = if config.rotated {
            config.rotation_deg
        } else {
            0.0
        };

        let mut pegs = Vec::with_capacity(config.rows * config.pegs_per_row + 1);

        for i in 0..config.rows {
            let shift = if i % 2 == 1 { column_spacing * 0.5 } else { 0.0 };
            let y = config.first_row_y + i as Real * config.row_spacing;

            for j in 0..config.pegs_per_row {
                let x = column_spacing * (j as Real + 1.0) + shift;
                pegs.push(Peg::new(
                    Point::new(x, y),
                    config.peg_half_extents,
                    rotation_deg,
                ));
            }
        }

        let floor_half_height = config.peg_half_extents.y;
        pegs.push(Peg::axis_aligned(
            Point::new(
                config.width / 2.0,
                config.height - FLOOR_OFFSET + floor_half_height,
            ),
            Vector::new(config.width / 2.0, floor_half_height),
        ));

        log::debug!(
            "laid out {} pegs on a {}x{} board (rotated: {})",
            pegs.len(),
            config.width,
            config.height,
            config.rotated
        );

        Ok(Self { config, pegs })
    }

    /// The configuration this board was built from.
    #[inline]
    pub fn config(&self) -> &PegBoardConfig {
        &self.config
    }

    /// All the pegs of this board, floor slab included.
    #[inline]
    pub fn pegs(&self) -> &[Peg] {
        &self.pegs
    }

    /// The floor slab.
    #[inline]
    pub fn floor(&self) -> &Peg {
        // A validated board always contains at least the floor.
        &self.pegs[self.pegs.len() - 1]
    }

    /// The board width.
    #[inline]
    pub fn width(&self) -> Real {
        self.config.width
    }

    /// The board height.
    #[inline]
    pub fn height(&self) -> Real {
        self.config.height
    }

    /// The points won by a ball landing at the horizontal coordinate `x`.
    ///
    /// The width is split into `SCORE_BINS.len()` equal bins. Returns `None` if
    /// `x` lies outside of the board.
    pub fn score_at(&self, x: Real) -> Option<u32> {
        if !(x >= 0.0 && x <= self.config.width) {
            return None;
        }

        let bin_width = self.config.width / SCORE_BINS.len() as Real;
        let bin = ((x / bin_width) as usize).min(SCORE_BINS.len() - 1);
        Some(SCORE_BINS[bin])
    }
}
