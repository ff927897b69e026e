use egui::Pos2;

use super::StarBoard;
use crate::star::{StarAge, StarId};

/// A discrete UI event, as delivered by the view layer.
#[derive(Clone, Debug, PartialEq)]
pub enum BoardInput {
    /// Pointer pressed on a star that is currently drawn at `star_position`.
    PointerDown {
        star: StarId,
        pointer: Pos2,
        star_position: Pos2,
    },
    /// Pointer moved anywhere over the board.
    PointerMove { pointer: Pos2 },
    /// Pointer released over a star.
    PointerUp,
    DoubleClick { star: StarId },
    /// The add-star form was submitted.
    AddStar { age: StarAge },
    /// The board was (re)measured.
    Resized { width: f32, height: f32 },
}

/// What handling one [`BoardInput`] did.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BoardResponse {
    /// A new snapshot was published.
    pub changed: bool,

    /// The id minted by [`BoardInput::AddStar`].
    pub added: Option<StarId>,
}

impl StarBoard {
    /// Translate one input event into the matching board operation.
    ///
    /// Pointer-leave is not an input: a drag that leaves the board without a pointer-up stays
    /// active until the next [`BoardInput::PointerUp`].
    pub fn handle(&mut self, input: BoardInput) -> BoardResponse {
        let before = self.snapshot.revision();
        let mut added = None;

        match input {
            BoardInput::PointerDown {
                star,
                pointer,
                star_position,
            } => {
                self.begin_drag(&star, pointer, star_position);
            }
            BoardInput::PointerMove { pointer } => {
                self.update_drag(pointer);
            }
            BoardInput::PointerUp => {
                self.end_drag();
            }
            BoardInput::DoubleClick { star } => {
                self.delete_star(&star);
            }
            BoardInput::AddStar { age } => {
                added = Some(self.add_star(age));
            }
            BoardInput::Resized { width, height } => {
                self.resize(width, height);
            }
        }

        BoardResponse {
            changed: self.snapshot.revision() != before,
            added,
        }
    }

    /// Handle a batch of events in delivery order.
    pub fn handle_all(&mut self, inputs: impl IntoIterator<Item = BoardInput>) -> BoardResponse {
        let mut response = BoardResponse::default();
        for input in inputs {
            let one = self.handle(input);
            response.changed |= one.changed;
            if one.added.is_some() {
                response.added = one.added;
            }
        }
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::StarRecord;

    #[test]
    fn pointer_sequence_drags_a_star() {
        let mut board = StarBoard::initialize([StarRecord::new("a", 10)], 200.0, 100.0);
        let start = board.star(&"a".into()).and_then(|s| s.position()).expect("positioned");
        assert_eq!(start, Pos2::new(100.0, 50.0));

        let down = board.handle(BoardInput::PointerDown {
            star: "a".into(),
            pointer: Pos2::new(105.0, 55.0),
            star_position: start,
        });
        assert!(!down.changed);
        assert!(board.is_dragging());

        let moved = board.handle(BoardInput::PointerMove {
            pointer: Pos2::new(150.0, 80.0),
        });
        assert!(moved.changed);
        assert_eq!(
            board.star(&"a".into()).and_then(|s| s.position()),
            Some(Pos2::new(145.0, 75.0))
        );

        board.handle(BoardInput::PointerUp);
        assert!(!board.is_dragging());
        assert!(
            !board
                .handle(BoardInput::PointerMove {
                    pointer: Pos2::ZERO
                })
                .changed
        );
    }

    #[test]
    fn add_and_double_click_round_trip() {
        let mut board = StarBoard::default();
        let response = board.handle_all([
            BoardInput::Resized {
                width: 40.0,
                height: 40.0,
            },
            BoardInput::AddStar { age: "12".into() },
        ]);
        assert!(response.changed);
        let id = response.added.expect("added id");
        assert_eq!(
            board.star(&id).and_then(|s| s.position()),
            Some(Pos2::new(20.0, 20.0))
        );

        assert!(board.handle(BoardInput::DoubleClick { star: id.clone() }).changed);
        assert!(!board.handle(BoardInput::DoubleClick { star: id }).changed);
        assert!(board.is_empty());
    }
}
