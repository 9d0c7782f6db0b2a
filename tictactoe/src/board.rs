use std::{
    fmt::{self, Display},
    ops::{Index, IndexMut},
};

use crate::player::Player;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Board<const N: usize> {
    cells: [[Option<Player>; N]; N],
}

impl<const N: usize> Default for Board<N> {
    fn default() -> Self {
        Board {
            cells: [[None; N]; N],
        }
    }
}

impl<const N: usize> Index<(usize, usize)> for Board<N> {
    type Output = Option<Player>;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.cells[row][col]
    }
}

impl<const N: usize> IndexMut<(usize, usize)> for Board<N> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        &mut self.cells[row][col]
    }
}

impl<const N: usize> Board<N> {
    pub fn has(row: usize, col: usize) -> bool {
        row < N && col < N
    }

    pub fn full(&self) -> bool {
        self.cells.iter().all(|row| row.iter().all(Option::is_some))
    }

    pub fn empty_squares(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..N)
            .flat_map(|row| (0..N).map(move |col| (row, col)))
            .filter(|&(row, col)| self.cells[row][col].is_none())
    }

    /// The player holding a full row, column or diagonal, if any.
    pub fn winner(&self) -> Option<Player> {
        for i in 0..N {
            if let Some(player) = self.line_owner((0..N).map(|j| (i, j))) {
                return Some(player);
            }
            if let Some(player) = self.line_owner((0..N).map(|j| (j, i))) {
                return Some(player);
            }
        }
        if let Some(player) = self.line_owner((0..N).map(|i| (i, i))) {
            return Some(player);
        }
        self.line_owner((0..N).map(|i| (i, N - 1 - i)))
    }

    fn line_owner(&self, mut line: impl Iterator<Item = (usize, usize)>) -> Option<Player> {
        let (row, col) = line.next()?;
        let owner = self.cells[row][col]?;
        line.all(|(row, col)| self.cells[row][col] == Some(owner))
            .then(|| owner)
    }
}

impl<const N: usize> Display for Board<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, " ")?;
        for col in 1..=N {
            write!(f, " {col}")?;
        }
        writeln!(f)?;
        for (row, cells) in self.cells.iter().enumerate() {
            write!(f, "{}", row + 1)?;
            for cell in cells {
                match cell {
                    Some(player) => write!(f, " {player}")?,
                    None => write!(f, "  ")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
