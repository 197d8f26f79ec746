use crate::model::{Bounds, Point};
use crate::scene::Scene;

/// Topmost shape whose global bounding box strictly contains `point`.
///
/// Scans in reverse draw order. A point lying exactly on a box edge does
/// not hit, so zero-area shapes (points, axis-parallel segments) are never
/// picked.
pub fn pick(scene: &Scene, point: Point) -> Option<u64> {
    scene
        .iter()
        .rev()
        .find(|obj| {
            Bounds::from_points(&obj.vertices_for_clipping())
                .is_some_and(|b| b.contains_strict(point))
        })
        .map(|obj| obj.id)
}

/// Tracks the single selected shape.
///
/// The id held here and the `selected` flags in the [`Scene`] are kept in
/// step: at most one object carries the flag, and it is the one whose id
/// is stored.
#[derive(Debug, Clone, Default)]
pub struct SelectionManager {
    selected_id: Option<u64>,
}

impl SelectionManager {
    /// Creates a new `SelectionManager` with no selection.
    ///
    /// # Examples
    ///
    /// ```
    /// use clipsketch_designer::selection_manager::SelectionManager;
    ///
    /// let manager = SelectionManager::new();
    /// assert_eq!(manager.selected_id(), None);
    /// ```
    pub fn new() -> Self {
        Self { selected_id: None }
    }

    pub fn selected_id(&self) -> Option<u64> {
        self.selected_id
    }

    /// Clears the selection flag on every shape.
    pub fn deselect_all(&mut self, scene: &mut Scene) {
        for obj in scene.iter_mut() {
            obj.selected = false;
        }
        self.selected_id = None;
    }

    /// Replaces the selection with the topmost shape under `point`.
    ///
    /// Clicking empty space leaves nothing selected.
    pub fn select_at(&mut self, scene: &mut Scene, point: Point) -> Option<u64> {
        self.deselect_all(scene);
        let hit = pick(scene, point);
        if let Some(id) = hit {
            self.select_id(scene, id);
        }
        tracing::debug!(x = point.x, y = point.y, ?hit, "select at point");
        hit
    }

    /// Selects `id`, clearing any previous selection. Unknown ids clear.
    pub fn select_id(&mut self, scene: &mut Scene, id: u64) {
        self.deselect_all(scene);
        if let Some(obj) = scene.get_mut(id) {
            obj.selected = true;
            self.selected_id = Some(id);
        }
    }

    /// Forgets the selection of a shape that is gone (e.g. after a scene clear).
    pub fn reset(&mut self) {
        self.selected_id = None;
    }
}
