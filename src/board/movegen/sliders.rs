use super::{Board, MoveFlag, MoveList, Square};

impl Board {
    /// Ray-cast from `from` along each direction, one step at a time,
    /// stopping at the board edge or at the first occupied square (which
    /// is included as a capture if it holds an enemy piece).
    pub(crate) fn generate_slider_moves(
        &self,
        from: Square,
        directions: &[(isize, isize)],
        moves: &mut MoveList,
    ) {
        let color = self.side_to_move();
        for &(dr, df) in directions {
            let mut current = from;
            while let Some(to) = current.offset(dr, df) {
                match self.piece_at(to) {
                    None => {
                        moves.push(self.create_move(from, to, MoveFlag::Quiet));
                        current = to;
                    }
                    Some((occupant_color, _)) => {
                        if occupant_color != color {
                            moves.push(self.create_move(from, to, MoveFlag::Quiet));
                        }
                        break;
                    }
                }
            }
        }
    }
}
