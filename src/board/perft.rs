//! Perft: full-tree legal-move counting for generator verification.

use super::Board;

impl Board {
    /// Count leaf positions reachable through legal paths at `depth`.
    ///
    /// Applies the same pseudo-legal generation and post-hoc legality
    /// filtering as the search, so reference node counts verify the whole
    /// generate/apply pipeline. Verification only; never used for play.
    pub fn perft(&mut self, depth: usize) -> u64 {
        if depth == 0 {
            return 1;
        }
        let moves = self.generate_moves(self.side_to_move());
        let snapshot = self.clone();
        let mut nodes = 0;
        for mv in &moves {
            if self.apply_move(*mv) {
                self.toggle_side_to_move();
                nodes += self.perft(depth - 1);
            }
            self.clone_from(&snapshot);
        }
        nodes
    }
}
