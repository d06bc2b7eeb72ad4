//! Core data model for InfiniteBrew.
//! Items on the surface, drag and brew bookkeeping, and the reducer that
//! drives all of it. Nothing here touches browser APIs.

use std::rc::Rc;
use yew::Reducible;

use crate::state::{BrewPhase, BrewingState, DragState};

/// Rendered edge length of every item on the surface (CSS px).
pub const ITEM_SIZE: f64 = 96.0;
/// Center distance below which a pumpkin and a candy combine.
pub const PROXIMITY_THRESHOLD: f64 = 96.0;
/// Where a potion lands when the surface could not be measured.
pub const FALLBACK_POTION_SPOT: Position = Position { x: 200.0, y: 200.0 };

/// DataTransfer format carrying a tray template's kind.
pub const TRAY_PAYLOAD_FORMAT: &str = "text/plain";
/// DataTransfer format carrying the id of an item being moved on the surface.
pub const MOVE_PAYLOAD_FORMAT: &str = "application/x-infinite-brew-item";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ItemKind {
    Pumpkin,
    Candy,
    /// Only ever produced by a brew, never spawned from the tray.
    Potion,
}

impl ItemKind {
    /// Kinds offered in the sidebar tray, in display order.
    pub const TRAY: [ItemKind; 2] = [ItemKind::Pumpkin, ItemKind::Candy];

    pub fn as_str(self) -> &'static str {
        match self {
            ItemKind::Pumpkin => "pumpkin",
            ItemKind::Candy => "candy",
            ItemKind::Potion => "potion",
        }
    }

    /// Parses a tray drag payload. Anything but a spawnable kind is rejected,
    /// which also filters out URLs browsers attach when dragging images.
    pub fn from_tray_payload(raw: &str) -> Option<Self> {
        match raw.trim() {
            "pumpkin" => Some(ItemKind::Pumpkin),
            "candy" => Some(ItemKind::Candy),
            _ => None,
        }
    }

    /// Image asset for the kind; potions render as a plain block.
    pub fn image_src(self) -> Option<String> {
        match self {
            ItemKind::Potion => None,
            kind => Some(format!("/{}.png", kind.as_str())),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn center(self) -> Position {
        Position::new(self.x + ITEM_SIZE / 2.0, self.y + ITEM_SIZE / 2.0)
    }

    pub fn distance_to(self, other: Position) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// The surface's bounding client rectangle, measured when an event arrives.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceBounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl SurfaceBounds {
    /// Converts viewport coordinates into surface-local ones.
    pub fn to_local(&self, client_x: f64, client_y: f64) -> Position {
        Position::new(client_x - self.left, client_y - self.top)
    }

    /// Keeps an item's whole box inside the surface.
    pub fn clamp_item(&self, pos: Position) -> Position {
        let max_x = (self.width - ITEM_SIZE).max(0.0);
        let max_y = (self.height - ITEM_SIZE).max(0.0);
        Position::new(pos.x.min(max_x).max(0.0), pos.y.min(max_y).max(0.0))
    }

    /// Top-left corner that puts an item at the visual center.
    pub fn potion_spot(&self) -> Position {
        Position::new(self.width / 2.0 - ITEM_SIZE / 2.0, self.height / 2.0 - ITEM_SIZE / 2.0)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct DroppedItem {
    /// `{kind}-{created_ms}-{seq}`; unique for the lifetime of a surface.
    pub id: String,
    pub kind: ItemKind,
    /// Top-left corner relative to the surface.
    pub position: Position,
    pub display_name: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BrewPair {
    pub pumpkin_id: String,
    pub candy_id: String,
}

/// Scans pumpkins (outer) against candies (inner) in insertion order and
/// returns the first pair closer than `threshold`. First match wins, not nearest.
pub fn find_brew_pair(items: &[DroppedItem], threshold: f64) -> Option<BrewPair> {
    let pumpkins = items.iter().filter(|i| i.kind == ItemKind::Pumpkin);
    for pumpkin in pumpkins {
        for candy in items.iter().filter(|i| i.kind == ItemKind::Candy) {
            let distance = pumpkin.position.center().distance_to(candy.position.center());
            if distance < threshold {
                return Some(BrewPair {
                    pumpkin_id: pumpkin.id.clone(),
                    candy_id: candy.id.clone(),
                });
            }
        }
    }
    None
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SurfaceState {
    /// Insertion ordered; a moved item keeps its index.
    pub items: Vec<DroppedItem>,
    pub drag: Option<DragState>,
    pub brewing: Option<BrewingState>,
    /// Bumped whenever the item list changes; drives the proximity scan.
    pub items_version: u64,
    next_seq: u64,
    next_brew_id: u64,
}

impl SurfaceState {
    pub fn is_brewing(&self) -> bool {
        self.brewing.is_some()
    }

    pub fn item(&self, id: &str) -> Option<&DroppedItem> {
        self.items.iter().find(|i| i.id == id)
    }

    fn mint_id(&mut self, kind: ItemKind, now_ms: f64) -> String {
        let seq = self.next_seq;
        self.next_seq += 1;
        format!("{}-{}-{}", kind.as_str(), now_ms.max(0.0) as u64, seq)
    }

    fn touch_items(&mut self) {
        self.items_version = self.items_version.wrapping_add(1);
    }

    /// Appends a new item where the pointer landed (no clamping on drop).
    pub fn drop_item(&self, kind: ItemKind, client_x: f64, client_y: f64, bounds: SurfaceBounds, now_ms: f64) -> Self {
        let mut new = self.clone();
        let id = new.mint_id(kind, now_ms);
        new.items.push(DroppedItem {
            id,
            kind,
            position: bounds.to_local(client_x, client_y),
            display_name: None,
        });
        new.touch_items();
        new
    }

    pub fn drag_start(&self, item_id: &str, offset_x: f64, offset_y: f64) -> Self {
        let mut new = self.clone();
        if new.item(item_id).is_some() {
            new.drag = Some(DragState {
                item_id: item_id.to_string(),
                offset_x,
                offset_y,
            });
        }
        new
    }

    /// Commits the active drag. Without bounds the position is left alone but
    /// the drag still ends.
    pub fn drag_end(&self, client_x: f64, client_y: f64, bounds: Option<SurfaceBounds>) -> Self {
        let mut new = self.clone();
        let Some(drag) = new.drag.take() else { return new; };
        let Some(bounds) = bounds else { return new; };
        let local = bounds.to_local(client_x, client_y);
        let target = bounds.clamp_item(Position::new(local.x - drag.offset_x, local.y - drag.offset_y));
        if let Some(item) = new.items.iter_mut().find(|i| i.id == drag.item_id) {
            item.position = target;
            new.touch_items();
        }
        new
    }

    pub fn begin_brew(&self, pair: BrewPair) -> Self {
        let mut new = self.clone();
        if new.brewing.is_some() {
            return new;
        }
        new.next_brew_id += 1;
        new.brewing = Some(BrewingState {
            brew_id: new.next_brew_id,
            pair,
            phase: BrewPhase::PendingName,
        });
        new
    }

    pub fn name_resolved(&self, brew_id: u64, name: String) -> Self {
        let mut new = self.clone();
        if let Some(brewing) = new.brewing.as_mut().filter(|b| b.brew_id == brew_id) {
            brewing.phase = BrewPhase::Named(name);
        }
        new
    }

    /// Consumes both sources. A named brew leaves one potion at the surface
    /// center; an unnamed one leaves nothing.
    pub fn resolve_brew(&self, brew_id: u64, bounds: Option<SurfaceBounds>, now_ms: f64) -> Self {
        let mut new = self.clone();
        let Some(brewing) = new.brewing.take_if(|b| b.brew_id == brew_id) else { return new; };
        let BrewPair { pumpkin_id, candy_id } = &brewing.pair;
        new.items.retain(|i| &i.id != pumpkin_id && &i.id != candy_id);
        if let Some(name) = brewing.name() {
            let id = new.mint_id(ItemKind::Potion, now_ms);
            new.items.push(DroppedItem {
                id,
                kind: ItemKind::Potion,
                position: bounds.map(|b| b.potion_spot()).unwrap_or(FALLBACK_POTION_SPOT),
                display_name: Some(name.to_string()),
            });
        }
        if new.drag.as_ref().is_some_and(|d| new.item(&d.item_id).is_none()) {
            new.drag = None;
        }
        new.touch_items();
        new
    }
}

// ---------------- Reducer & Actions -----------------
#[derive(Clone, Debug)]
pub enum SurfaceAction {
    DropItem { kind: ItemKind, client_x: f64, client_y: f64, bounds: SurfaceBounds, now_ms: f64 },
    DragStart { item_id: String, offset_x: f64, offset_y: f64 },
    DragEnd { client_x: f64, client_y: f64, bounds: Option<SurfaceBounds> },
    BeginBrew(BrewPair),
    NameResolved { brew_id: u64, name: String },
    ResolveBrew { brew_id: u64, bounds: Option<SurfaceBounds>, now_ms: f64 },
}

impl Reducible for SurfaceState {
    type Action = SurfaceAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        use SurfaceAction::*;
        let new = match action {
            DropItem { kind, client_x, client_y, bounds, now_ms } => self.drop_item(kind, client_x, client_y, bounds, now_ms),
            DragStart { item_id, offset_x, offset_y } => {
                if self.item(&item_id).is_none() { return self; }
                self.drag_start(&item_id, offset_x, offset_y)
            }
            DragEnd { client_x, client_y, bounds } => {
                if self.drag.is_none() { return self; }
                self.drag_end(client_x, client_y, bounds)
            }
            BeginBrew(pair) => {
                if self.is_brewing() { return self; }
                self.begin_brew(pair)
            }
            NameResolved { brew_id, name } => self.name_resolved(brew_id, name),
            ResolveBrew { brew_id, bounds, now_ms } => {
                if self.brewing.as_ref().map(|b| b.brew_id) != Some(brew_id) { return self; }
                self.resolve_brew(brew_id, bounds, now_ms)
            }
        };
        Rc::new(new)
    }
}
