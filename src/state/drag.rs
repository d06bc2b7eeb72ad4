// Active drag of an item already on the surface.
#[derive(Debug, Clone, PartialEq)]
pub struct DragState {
    pub item_id: String,
    /// Pointer position relative to the item's top-left corner at drag start.
    pub offset_x: f64,
    pub offset_y: f64,
}
