//! Operator-curated route list and the last optimization result.

use std::fmt;
use std::sync::Arc;

use crate::error::PlannerError;
use crate::feature::Feature;
use crate::geometry::LineString;
use crate::wire::RoutePoint;

/// Direction for manual reordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Towards the start of the list (-1).
    Up,
    /// Towards the end of the list (+1).
    Down,
}

impl Direction {
    /// Maps a `-1` / `+1` step; anything else is not a direction.
    pub fn from_step(step: i32) -> Option<Self> {
        match step {
            -1 => Some(Direction::Up),
            1 => Some(Direction::Down),
            _ => None,
        }
    }
}

/// Ordered candidate stops. No id appears twice.
#[derive(Debug, Clone, Default)]
pub struct RouteList {
    entries: Vec<Arc<Feature>>,
}

impl RouteList {
    /// Appends `feature` unless an entry with the same id exists.
    pub fn add(&mut self, feature: Arc<Feature>) -> bool {
        if self.contains(&feature.id) {
            return false;
        }
        self.entries.push(feature);
        true
    }

    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        self.entries.len() != before
    }

    /// Swaps the entry at `index` with its neighbour. Out of range is a no-op.
    pub fn move_entry(&mut self, index: usize, direction: Direction) -> bool {
        let target = match direction {
            Direction::Up => index.checked_sub(1),
            Direction::Down => index.checked_add(1),
        };
        match target {
            Some(target) if index < self.entries.len() && target < self.entries.len() => {
                self.entries.swap(index, target);
                true
            }
            _ => false,
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.iter().any(|entry| entry.id == id)
    }

    pub fn entries(&self) -> &[Arc<Feature>] {
        &self.entries
    }

    pub fn ids(&self) -> Vec<&str> {
        self.entries.iter().map(|entry| entry.id.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Projects the list to submission points.
    ///
    /// Fails without a partial payload if any entry lacks coordinates; the
    /// error names every such entry.
    pub fn build_submission(&self) -> Result<Vec<RoutePoint>, PlannerError> {
        let missing: Vec<String> = self
            .entries
            .iter()
            .filter(|entry| !entry.is_mappable())
            .map(|entry| entry.id.clone())
            .collect();
        if !missing.is_empty() {
            return Err(PlannerError::MissingCoordinates(missing));
        }

        Ok(self
            .entries
            .iter()
            .filter_map(|entry| {
                entry.position().map(|(lon, lat)| RoutePoint {
                    id: entry.id.clone(),
                    lon,
                    lat,
                })
            })
            .collect())
    }
}

/// Outcome of the last successful optimization.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RouteResult {
    pub geometry: LineString,
    /// Feature ids in optimized visiting order.
    pub order: Vec<String>,
    pub distance_m: f64,
    pub duration_s: f64,
}

impl RouteResult {
    pub fn distance_km(&self) -> f64 {
        self.distance_m / 1000.0
    }

    pub fn duration_min(&self) -> f64 {
        self.duration_s / 60.0
    }

    pub fn summary(&self) -> RouteSummary {
        RouteSummary {
            distance_km: self.distance_km(),
            duration_min: self.duration_min(),
        }
    }
}

/// Human-readable totals, e.g. `1.25 km, 14.9 min`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouteSummary {
    pub distance_km: f64,
    pub duration_min: f64,
}

impl fmt::Display for RouteSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} km, {:.1} min", self.distance_km, self.duration_min)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feature::BuildingType;

    fn feature(id: &str, position: Option<(f64, f64)>) -> Arc<Feature> {
        Arc::new(Feature {
            id: id.into(),
            typ: BuildingType::Rd,
            byty: 1,
            letaky: 1,
            lon: position.map(|p| p.0),
            lat: position.map(|p| p.1),
            address: String::new(),
            cast_obce: None,
            psc: None,
            doporuceni: Vec::new(),
            nejiste: false,
        })
    }

    fn list(ids: &[&str]) -> RouteList {
        let mut list = RouteList::default();
        for id in ids {
            list.add(feature(id, Some((15.0, 49.0))));
        }
        list
    }

    #[test]
    fn add_is_idempotent_on_id() {
        let mut list = RouteList::default();
        assert!(list.add(feature("x", None)));
        assert!(!list.add(feature("x", Some((15.0, 49.0)))));
        assert_eq!(list.ids(), vec!["x"]);
    }

    #[test]
    fn remove_missing_is_noop() {
        let mut list = list(&["a", "b"]);
        assert!(!list.remove("z"));
        assert!(list.remove("a"));
        assert_eq!(list.ids(), vec!["b"]);
    }

    #[test]
    fn move_swaps_neighbours() {
        let mut list = list(&["a", "b", "c"]);
        assert!(list.move_entry(0, Direction::Down));
        assert_eq!(list.ids(), vec!["b", "a", "c"]);
        assert!(list.move_entry(2, Direction::Up));
        assert_eq!(list.ids(), vec!["b", "c", "a"]);
    }

    #[test]
    fn move_at_boundaries_is_noop() {
        let mut list = list(&["a", "b", "c"]);
        assert!(!list.move_entry(0, Direction::Up));
        assert!(!list.move_entry(2, Direction::Down));
        assert!(!list.move_entry(2, Direction::Down));
        assert!(!list.move_entry(7, Direction::Up));
        assert_eq!(list.ids(), vec!["a", "b", "c"]);
    }

    #[test]
    fn move_round_trip_restores_order() {
        let mut list = list(&["a", "b", "c", "d"]);
        list.move_entry(1, Direction::Down);
        list.move_entry(2, Direction::Up);
        assert_eq!(list.ids(), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn direction_from_step() {
        assert_eq!(Direction::from_step(-1), Some(Direction::Up));
        assert_eq!(Direction::from_step(1), Some(Direction::Down));
        assert_eq!(Direction::from_step(0), None);
    }

    #[test]
    fn submission_projects_in_list_order() {
        let mut list = RouteList::default();
        list.add(feature("b", Some((15.1, 49.1))));
        list.add(feature("a", Some((15.0, 49.0))));
        let points = list.build_submission().unwrap();
        assert_eq!(
            points,
            vec![
                RoutePoint {
                    id: "b".into(),
                    lon: 15.1,
                    lat: 49.1,
                },
                RoutePoint {
                    id: "a".into(),
                    lon: 15.0,
                    lat: 49.0,
                },
            ]
        );
    }

    #[test]
    fn submission_rejects_uncoordinated_entries() {
        let mut list = RouteList::default();
        list.add(feature("a", Some((15.0, 49.0))));
        list.add(feature("b", None));
        list.add(feature("c", None));
        match list.build_submission() {
            Err(PlannerError::MissingCoordinates(ids)) => assert_eq!(ids, vec!["b", "c"]),
            other => panic!("expected MissingCoordinates, got {:?}", other),
        }
    }

    #[test]
    fn summary_formatting() {
        let result = RouteResult {
            distance_m: 1254.0,
            duration_s: 895.7,
            ..RouteResult::default()
        };
        assert_eq!(result.summary().to_string(), "1.25 km, 14.9 min");
    }
}
