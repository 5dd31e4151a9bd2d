//! The drawing that fills in with every wrong guess.
//!
//! Shapes live in a 240x300 space with the origin in the bottom left corner,
//! which is what ratatui's canvas expects.

pub const WIDTH: f64 = 240.0;
pub const HEIGHT: f64 = 300.0;

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Shape {
    Line { x1: f64, y1: f64, x2: f64, y2: f64 },
    Circle { x: f64, y: f64, radius: f64 },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Part {
    Base,
    Post,
    Beam,
    Rope,
    Head,
    Body,
    LeftArm,
    RightArm,
    LeftLeg,
    RightLeg,
}

/// Always drawn
pub const SCAFFOLD: [Part; 4] = [Part::Base, Part::Post, Part::Beam, Part::Rope];

/// Drawn one by one, the n-th wrong guess adds `FIGURE[n - 1]`
pub const FIGURE: [Part; 6] = [
    Part::Head,
    Part::Body,
    Part::LeftArm,
    Part::RightArm,
    Part::LeftLeg,
    Part::RightLeg,
];

impl Part {
    pub fn shape(&self) -> Shape {
        use Part::*;
        let (x1, y1, x2, y2) = match self {
            Base => (20.0, 20.0, 200.0, 20.0),
            Post => (60.0, 20.0, 60.0, 260.0),
            Beam => (60.0, 260.0, 150.0, 260.0),
            Rope => (150.0, 260.0, 150.0, 230.0),
            Head => {
                return Shape::Circle {
                    x: 150.0,
                    y: 210.0,
                    radius: 20.0,
                }
            }
            Body => (150.0, 190.0, 150.0, 120.0),
            LeftArm => (150.0, 180.0, 120.0, 150.0),
            RightArm => (150.0, 180.0, 180.0, 150.0),
            LeftLeg => (150.0, 120.0, 130.0, 70.0),
            RightLeg => (150.0, 120.0, 170.0, 70.0),
        };
        Shape::Line { x1, y1, x2, y2 }
    }

    pub fn is_scaffold(&self) -> bool {
        SCAFFOLD.contains(self)
    }
}

/// Figure parts visible after `wrong` wrong guesses. Counts past the last
/// part add nothing.
///
/// # Example
///
/// ```
/// use hangman::gallows::{figure, Part};
/// assert!(figure(0).is_empty());
/// assert_eq!(figure(2), &[Part::Head, Part::Body]);
/// assert_eq!(figure(9).len(), 6);
/// ```
pub fn figure(wrong: usize) -> &'static [Part] {
    &FIGURE[..wrong.min(FIGURE.len())]
}

/// Every part to draw after `wrong` wrong guesses, scaffold first
pub fn parts(wrong: usize) -> impl Iterator<Item = Part> {
    SCAFFOLD.into_iter().chain(figure(wrong).iter().copied())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn within_bounds(shape: Shape) -> bool {
        let inside = |x: f64, y: f64| (0.0..=WIDTH).contains(&x) && (0.0..=HEIGHT).contains(&y);
        match shape {
            Shape::Line { x1, y1, x2, y2 } => inside(x1, y1) && inside(x2, y2),
            Shape::Circle { x, y, radius } => {
                inside(x - radius, y - radius) && inside(x + radius, y + radius)
            }
        }
    }

    #[test]
    fn parts_grow_one_per_step() {
        assert_eq!(parts(0).count(), 4);
        for wrong in 1..=FIGURE.len() {
            let drawn: Vec<Part> = parts(wrong).collect();
            assert_eq!(drawn.len(), 4 + wrong);
            assert_eq!(drawn[3 + wrong], FIGURE[wrong - 1]);
        }
        assert_eq!(parts(100).count(), 10);
    }

    #[test]
    fn shapes_fit_canvas() {
        for part in SCAFFOLD.iter().chain(FIGURE.iter()) {
            assert!(within_bounds(part.shape()), "{part:?} is out of bounds");
        }
    }

    #[test]
    fn head_hangs_from_rope() {
        let Shape::Line { x2, y2, .. } = Part::Rope.shape() else {
            panic!("rope should be a line")
        };
        let Shape::Circle { x, y, radius } = Part::Head.shape() else {
            panic!("head should be a circle")
        };
        assert_eq!(x, x2);
        assert_eq!(y + radius, y2);
        assert!(Part::Rope.is_scaffold());
        assert!(!Part::Head.is_scaffold());
    }
}
