//! 2D bounded grid for the world.

use life_core::{Direction, Error, Organism, Position, Result};

/// A bounded grid of cells, each holding at most one organism
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: i32,
    height: i32,
    cells: Vec<Option<Organism>>,
}

impl Grid {
    pub fn new(width: i32, height: i32) -> Result<Self> {
        if width <= 0 || height <= 0 {
            return Err(Error::Validation(format!(
                "Grid dimensions must be positive, got {}x{}",
                width, height
            )));
        }

        let size = (width as usize) * (height as usize);
        Ok(Self {
            width,
            height,
            cells: vec![None; size],
        })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Clear every cell
    pub fn rebuild(&mut self) {
        self.cells.iter_mut().for_each(|cell| *cell = None);
    }

    /// Place an organism at its own coordinates, replacing any occupant
    pub fn set_organism(&mut self, organism: Organism) -> Result<()> {
        let index = self.index_of(organism.x(), organism.y())?;
        self.cells[index] = Some(organism);
        Ok(())
    }

    /// Place organisms in order; stops at the first invalid coordinate
    pub fn set_organisms<'a>(
        &mut self,
        organisms: impl IntoIterator<Item = &'a Organism>,
    ) -> Result<()> {
        for organism in organisms {
            self.set_organism(*organism)?;
        }
        Ok(())
    }

    pub fn organism_at(&self, x: i32, y: i32) -> Result<Option<Organism>> {
        let index = self.index_of(x, y)?;
        Ok(self.cells[index])
    }

    /// In-bounds Moore neighbors of a cell: west, east, north, south, then
    /// the diagonals.
    pub fn neighbor_cells_at(&self, x: i32, y: i32) -> Result<Vec<Position>> {
        self.index_of(x, y)?;

        let origin = Position::new(x, y);
        Ok(Direction::all()
            .iter()
            .map(|direction| {
                let (dx, dy) = direction.to_delta();
                origin.add(dx, dy)
            })
            .filter(|pos| self.contains(pos.x, pos.y))
            .collect())
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        (0..self.width).contains(&x) && (0..self.height).contains(&y)
    }

    /// Iterator over all positions, x outer and y inner
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.width).flat_map(move |x| (0..self.height).map(move |y| Position::new(x, y)))
    }

    /// Iterator over all occupants, in the same order as `positions`
    pub fn organisms(&self) -> impl Iterator<Item = Organism> + '_ {
        self.positions()
            .filter_map(move |pos| self.cells[self.pos_to_index(pos)])
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    fn index_of(&self, x: i32, y: i32) -> Result<usize> {
        if !self.contains(x, y) {
            return Err(Error::InvalidCoordinates {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(self.pos_to_index(Position::new(x, y)))
    }

    fn pos_to_index(&self, pos: Position) -> usize {
        (pos.y * self.width + pos.x) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_grid_creation() {
        let grid = Grid::new(10, 7).unwrap();
        assert_eq!(grid.width(), 10);
        assert_eq!(grid.height(), 7);
        assert_eq!(grid.cells.len(), 70);
        assert_eq!(grid.occupied_count(), 0);
    }

    #[test]
    fn test_grid_rejects_empty_dimensions() {
        assert!(matches!(Grid::new(0, 5), Err(Error::Validation(_))));
        assert!(matches!(Grid::new(5, -1), Err(Error::Validation(_))));
    }

    #[test]
    fn test_set_and_get_organism() {
        let mut grid = Grid::new(5, 5).unwrap();
        let organism = Organism::new(3, 1, 2);

        grid.set_organism(organism).unwrap();
        assert_eq!(grid.organism_at(3, 1).unwrap(), Some(organism));
        assert_eq!(grid.organism_at(1, 3).unwrap(), None);
    }

    #[test]
    fn test_set_organism_overwrites() {
        let mut grid = Grid::new(5, 5).unwrap();
        grid.set_organism(Organism::new(1, 1, 1)).unwrap();
        grid.set_organism(Organism::new(1, 1, 2)).unwrap();

        assert_eq!(grid.organism_at(1, 1).unwrap(), Some(Organism::new(1, 1, 2)));
        assert_eq!(grid.occupied_count(), 1);
    }

    #[test]
    fn test_out_of_bounds_access() {
        let mut grid = Grid::new(5, 5).unwrap();

        assert!(matches!(
            grid.set_organism(Organism::new(5, 0, 1)),
            Err(Error::InvalidCoordinates { x: 5, y: 0, .. })
        ));
        assert!(matches!(
            grid.organism_at(0, -1),
            Err(Error::InvalidCoordinates { .. })
        ));
        assert!(matches!(
            grid.neighbor_cells_at(-1, 2),
            Err(Error::InvalidCoordinates { .. })
        ));
    }

    #[test]
    fn test_set_organisms_stops_at_first_invalid() {
        let mut grid = Grid::new(5, 5).unwrap();
        let organisms = vec![
            Organism::new(0, 0, 1),
            Organism::new(100, -20, 1),
            Organism::new(1, 1, 1),
        ];

        assert!(grid.set_organisms(&organisms).is_err());
        assert!(grid.organism_at(0, 0).unwrap().is_some());
        assert!(grid.organism_at(1, 1).unwrap().is_none());
    }

    #[test]
    fn test_rebuild_clears_cells() {
        let mut grid = Grid::new(5, 5).unwrap();
        grid.set_organisms(&[Organism::new(0, 0, 1), Organism::new(4, 4, 2)])
            .unwrap();

        grid.rebuild();
        assert_eq!(grid.occupied_count(), 0);
        assert_eq!(grid.organisms().count(), 0);
    }

    #[test]
    fn test_neighbor_order() {
        let grid = Grid::new(5, 5).unwrap();
        let neighbors = grid.neighbor_cells_at(2, 2).unwrap();

        assert_eq!(
            neighbors,
            vec![
                Position::new(1, 2),
                Position::new(3, 2),
                Position::new(2, 1),
                Position::new(2, 3),
                Position::new(1, 1),
                Position::new(3, 1),
                Position::new(1, 3),
                Position::new(3, 3),
            ]
        );
    }

    #[test]
    fn test_neighbor_counts() {
        let grid = Grid::new(5, 5).unwrap();

        // corners
        for (x, y) in [(0, 0), (4, 0), (0, 4), (4, 4)] {
            assert_eq!(grid.neighbor_cells_at(x, y).unwrap().len(), 3);
        }
        // edges
        for (x, y) in [(2, 0), (0, 2), (4, 2), (2, 4)] {
            assert_eq!(grid.neighbor_cells_at(x, y).unwrap().len(), 5);
        }
        assert_eq!(grid.neighbor_cells_at(1, 3).unwrap().len(), 8);
    }

    #[test]
    fn test_single_cell_grid_has_no_neighbors() {
        let grid = Grid::new(1, 1).unwrap();
        assert!(grid.neighbor_cells_at(0, 0).unwrap().is_empty());
    }

    #[test]
    fn test_organisms_scan_order() {
        let mut grid = Grid::new(3, 3).unwrap();
        grid.set_organisms(&[
            Organism::new(2, 0, 1),
            Organism::new(0, 2, 1),
            Organism::new(0, 1, 2),
        ])
        .unwrap();

        let scanned: Vec<Organism> = grid.organisms().collect();
        assert_eq!(
            scanned,
            vec![
                Organism::new(0, 1, 2),
                Organism::new(0, 2, 1),
                Organism::new(2, 0, 1),
            ]
        );
    }

    proptest! {
        #[test]
        fn prop_neighbors_are_adjacent_and_in_bounds(
            width in 1i32..12,
            height in 1i32..12,
            x_seed in 0i32..1000,
            y_seed in 0i32..1000,
        ) {
            let grid = Grid::new(width, height).unwrap();
            let (x, y) = (x_seed % width, y_seed % height);
            let origin = Position::new(x, y);
            let neighbors = grid.neighbor_cells_at(x, y).unwrap();

            for neighbor in &neighbors {
                prop_assert!(grid.contains(neighbor.x, neighbor.y));
                prop_assert_eq!(origin.chebyshev_distance(neighbor), 1);
            }

            let x_edge = x == 0 || x == width - 1;
            let y_edge = y == 0 || y == height - 1;
            if width >= 2 && height >= 2 {
                let expected = match (x_edge, y_edge) {
                    (true, true) => 3,
                    (true, false) | (false, true) => 5,
                    (false, false) => 8,
                };
                prop_assert_eq!(neighbors.len(), expected);
            }
        }

        #[test]
        fn prop_write_then_read(
            x in -3i32..10,
            y in -3i32..10,
            species in 1u32..5,
        ) {
            let mut grid = Grid::new(6, 6).unwrap();
            let organism = Organism::new(x, y, species);

            if grid.contains(x, y) {
                grid.set_organism(organism).unwrap();
                prop_assert_eq!(grid.organism_at(x, y).unwrap(), Some(organism));
            } else {
                let set_is_invalid = matches!(
                    grid.set_organism(organism),
                    Err(Error::InvalidCoordinates { .. })
                );
                let get_is_invalid = matches!(
                    grid.organism_at(x, y),
                    Err(Error::InvalidCoordinates { .. })
                );
                prop_assert!(set_is_invalid);
                prop_assert!(get_is_invalid);
            }
        }
    }
}
