// Copyright 2020 Zachary Stewart
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
use crate::board::{Coordinate, Direction};

/// Direction of a straight line of cells. Returns `None` if there are fewer than two
/// cells, or if any step between consecutive cells differs from the first one.
pub fn line_axis(cells: &[Coordinate]) -> Option<Direction> {
    let mut steps = cells
        .windows(2)
        .map(|pair| Direction::between(&pair[0], &pair[1]));
    // Fewer than two cells means there are no steps at all.
    let axis = steps.next()??;
    if steps.all(|step| step == Some(axis)) {
        Some(axis)
    } else {
        None
    }
}

/// Return true if the cells form a straight line with unit spacing along one of the
/// eight compass directions. A single cell is a line; no cells is not.
pub fn is_straight_line(cells: &[Coordinate]) -> bool {
    match cells.len() {
        0 => false,
        1 => true,
        _ => line_axis(cells).is_some(),
    }
}
