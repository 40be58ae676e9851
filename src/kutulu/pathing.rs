use std::collections::VecDeque;

use super::model::*;

pub const UNREACHABLE: i32 = i32::MAX;

/// Walking distance from the nearest of a set of sources to every cell
pub struct DistanceMap {
    distances: Box<[i32]>,
}
impl DistanceMap {
    pub fn generate(maze: &Maze, sources: impl IntoIterator<Item=Pos>) -> Self {
        let mut distances = vec![UNREACHABLE; maze.num_cells()];

        let mut queue = VecDeque::new();
        for source in sources {
            if let Some(index) = maze.index(source) {
                if distances[index] > 0 {
                    distances[index] = 0;
                    queue.push_back(source);
                }
            }
        }

        while let Some(current) = queue.pop_front() {
            let Some(index) = maze.index(current) else { continue };
            let neighbor_distance = distances[index] + 1;
            for n in current.neighbors() {
                if !maze.is_walkable(n) { continue }
                let Some(n_index) = maze.index(n) else { continue };
                if neighbor_distance < distances[n_index] {
                    distances[n_index] = neighbor_distance;
                    queue.push_back(n);
                }
            }
        }

        Self {
            distances: distances.into_boxed_slice(),
        }
    }

    pub fn distance_to(&self, maze: &Maze, pos: Pos) -> i32 {
        match maze.index(pos) {
            Some(index) => self.distances[index],
            None => UNREACHABLE,
        }
    }

    /// One step from `pos` towards the nearest source, or `None` if already there or cut off
    pub fn step_towards_source(&self, maze: &Maze, pos: Pos) -> Option<Pos> {
        let current = self.distance_to(maze, pos);
        if current == 0 || current == UNREACHABLE { return None }

        pos.neighbors().into_iter()
            .filter(|&n| maze.is_walkable(n))
            .min_by_key(|&n| self.distance_to(maze, n))
            .filter(|&n| self.distance_to(maze, n) < current)
    }
}
