use crate::coords::{Rect, Transform};

use super::{DrawCmd, SortKey, ZIndex};

/// A single draw item: sort key + command + the state it was recorded under.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    pub key: SortKey,
    pub cmd: DrawCmd,
    /// Scissor rect in device pixels. `None` = no clipping (draw everywhere).
    pub clip_rect: Option<Rect>,
    /// Local-to-device transform in effect when the item was pushed.
    pub transform: Transform,
}

/// Recorded draw stream for a frame.
///
/// Performance characteristics:
/// - `push()` is O(1)
/// - paint-order iteration reuses an internal index buffer; no per-frame allocation once warmed
///
/// # Clipping and transforms
///
/// [`push_clip`] / [`pop_clip`] scope commands to a scissor rect (device
/// space). [`push_transform`] / [`pop_transform`] scope commands to a local
/// coordinate frame; each push composes with the current top, so
/// `push_transform(rotate)` followed by `push_transform(translate)` behaves
/// like a canvas `rotate` then `translate`.
///
/// Both stacks must be balanced by the code that pushed onto them.
///
/// [`push_clip`]: DrawList::push_clip
/// [`pop_clip`]: DrawList::pop_clip
/// [`push_transform`]: DrawList::push_transform
/// [`pop_transform`]: DrawList::pop_transform
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawItem>,
    next_order: u32,

    sorted_indices: Vec<usize>,
    sorted_dirty: bool,

    /// Active scissor rects. The top is the effective clip, already
    /// intersected with every parent.
    clip_stack: Vec<Rect>,
    /// Active transforms. The top is the full local-to-device transform.
    transform_stack: Vec<Transform>,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded items and both stacks. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
        self.next_order = 0;
        self.sorted_dirty = true;
        self.sorted_indices.clear();
        self.clip_stack.clear();
        self.transform_stack.clear();
    }

    /// Returns items in insertion order.
    #[inline]
    pub fn items(&self) -> &[DrawItem] {
        &self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Pushes a draw command with the given z-index.
    ///
    /// The item inherits the current clip rect and transform.
    #[inline]
    pub fn push(&mut self, z: ZIndex, cmd: DrawCmd) {
        let order = self.next_order;
        self.next_order = self.next_order.wrapping_add(1);

        self.items.push(DrawItem {
            key: SortKey::new(z, order),
            cmd,
            clip_rect: self.clip_stack.last().copied(),
            transform: self.current_transform(),
        });

        self.sorted_dirty = true;
    }

    /// Begins a scissor region intersected with any parent clip.
    ///
    /// Calls must be balanced with [`pop_clip`](Self::pop_clip).
    #[inline]
    pub fn push_clip(&mut self, rect: Rect) {
        let effective = match self.clip_stack.last() {
            None => rect,
            // No overlap produces a zero-area rect so the renderer skips the items.
            Some(&parent) => parent.intersect(rect).unwrap_or_default(),
        };
        self.clip_stack.push(effective);
    }

    /// Ends the most recent scissor region.
    ///
    /// # Panics
    /// Panics (debug only) if called without a matching `push_clip`.
    #[inline]
    pub fn pop_clip(&mut self) {
        debug_assert!(!self.clip_stack.is_empty(), "pop_clip called without matching push_clip");
        self.clip_stack.pop();
    }

    /// Enters a local frame: subsequent items are transformed by `t` and then
    /// by every transform already on the stack.
    ///
    /// Calls must be balanced with [`pop_transform`](Self::pop_transform).
    #[inline]
    pub fn push_transform(&mut self, t: Transform) {
        let combined = self.current_transform().then(t);
        self.transform_stack.push(combined);
    }

    /// Leaves the most recent local frame.
    ///
    /// # Panics
    /// Panics (debug only) if called without a matching `push_transform`.
    #[inline]
    pub fn pop_transform(&mut self) {
        debug_assert!(
            !self.transform_stack.is_empty(),
            "pop_transform called without matching push_transform"
        );
        self.transform_stack.pop();
    }

    /// Transform applied to items pushed right now.
    #[inline]
    pub fn current_transform(&self) -> Transform {
        self.transform_stack.last().copied().unwrap_or_default()
    }

    /// Number of unbalanced `push_transform` calls.
    #[inline]
    pub fn transform_depth(&self) -> usize {
        self.transform_stack.len()
    }

    /// Number of unbalanced `push_clip` calls.
    #[inline]
    pub fn clip_depth(&self) -> usize {
        self.clip_stack.len()
    }

    /// Iterates items in paint order (back-to-front) without cloning draw commands.
    pub fn iter_in_paint_order(&mut self) -> impl Iterator<Item = &DrawItem> {
        if self.sorted_dirty {
            self.rebuild_sorted_indices();
        }

        let items = &self.items;
        self.sorted_indices.iter().map(move |&i| &items[i])
    }

    fn rebuild_sorted_indices(&mut self) {
        self.sorted_indices.clear();
        self.sorted_indices.extend(0..self.items.len());

        let items = &self.items;
        self.sorted_indices.sort_by_key(|&i| items[i].key);

        self.sorted_dirty = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::{Path, Vec2};
    use crate::paint::Color;

    fn tri() -> Path {
        Path::polygon(&[Vec2::new(0.0, 0.0), Vec2::new(4.0, 0.0), Vec2::new(0.0, 4.0)])
    }

    #[test]
    fn paint_order_sorts_by_z_then_insertion() {
        let mut list = DrawList::new();
        list.push_fill_path(ZIndex(2), tri(), Color::white());
        list.push_fill_path(ZIndex(0), tri(), Color::white());
        list.push_fill_path(ZIndex(2), tri(), Color::transparent());

        let keys: Vec<_> = list.iter_in_paint_order().map(|i| (i.key.z.0, i.key.order)).collect();
        assert_eq!(keys, vec![(0, 1), (2, 0), (2, 2)]);
    }

    #[test]
    fn transforms_compose_and_unwind() {
        let mut list = DrawList::new();
        list.push_transform(Transform::rotate_deg(90.0));
        list.push_transform(Transform::translate(10.0, 0.0));
        list.push_fill_path(ZIndex(0), tri(), Color::white());
        list.pop_transform();
        list.pop_transform();
        list.push_fill_path(ZIndex(1), tri(), Color::white());

        let origin = list.items()[0].transform.apply(Vec2::zero());
        assert!(origin.x.abs() < 1e-4 && (origin.y - 10.0).abs() < 1e-4);
        assert!(list.items()[1].transform.is_identity());
        assert_eq!(list.transform_depth(), 0);
    }

    #[test]
    fn nested_clips_intersect() {
        let mut list = DrawList::new();
        list.push_clip(Rect::new(0.0, 0.0, 10.0, 10.0));
        list.push_clip(Rect::new(5.0, 5.0, 10.0, 10.0));
        list.push_fill_path(ZIndex(0), tri(), Color::white());
        list.pop_clip();
        list.pop_clip();
        assert_eq!(list.items()[0].clip_rect, Some(Rect::new(5.0, 5.0, 5.0, 5.0)));
        assert_eq!(list.clip_depth(), 0);
    }

    #[test]
    fn empty_path_is_not_recorded() {
        let mut list = DrawList::new();
        list.push_fill_path(ZIndex(0), Path::new(), Color::white());
        assert!(list.is_empty());
    }

    #[test]
    fn clear_resets_stacks() {
        let mut list = DrawList::new();
        list.push_transform(Transform::translate(1.0, 1.0));
        list.push_fill_path(ZIndex(0), tri(), Color::white());
        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.transform_depth(), 0);
        assert!(list.current_transform().is_identity());
    }
}
