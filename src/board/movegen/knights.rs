use super::{Board, MoveFlag, MoveList, Square, KNIGHT_OFFSETS};

impl Board {
    pub(crate) fn generate_knight_moves(&self, from: Square, moves: &mut MoveList) {
        let color = self.side_to_move();
        for (dr, df) in KNIGHT_OFFSETS {
            let Some(to) = from.offset(dr, df) else {
                continue;
            };
            if self.color_on(to) != Some(color) {
                moves.push(self.create_move(from, to, MoveFlag::Quiet));
            }
        }
    }
}
