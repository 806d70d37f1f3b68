//! CornerBadge UI: a retained corner-ribbon widget on top of `cornerbadge-engine`.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use cornerbadge_ui::prelude::*;
//!
//! let mut scene = UiScene::new();
//! let font = scene.load_font(include_bytes!("my_font.ttf"))?;
//!
//! let sheet = cornerbadge_style::parse_str(include_str!("badges.badge"))?;
//! let resources = Resources::from_sheet(&sheet);
//! let config = BadgeConfig::from_style(sheet.badge("promo").unwrap(), &resources)?.font(font);
//! let mut root = Element::from(CornerBadge::new(config, &scene.layout_ctx()));
//!
//! // In your frame callback:
//! let draw_list = scene.frame(&mut root, viewport);
//! // Pass draw_list to the renderer.
//! ```
//!
//! # Extending with custom widgets
//!
//! Implement [`Widget`] for any type, then wrap it in an [`Element`]:
//!
//! ```rust,ignore
//! use cornerbadge_ui::prelude::*;
//!
//! pub struct Square { color: Color }
//!
//! impl Widget for Square {
//!     fn measure(&self, constraints: Constraints, _ctx: &LayoutCtx) -> Vec2 {
//!         constraints.constrain(Vec2::new(40.0, 40.0))
//!     }
//!     fn paint(&self, painter: &mut Painter, rect: Rect) {
//!         let max = rect.max();
//!         let corners = [rect.origin, Vec2::new(max.x, rect.origin.y), max, Vec2::new(rect.origin.x, max.y)];
//!         painter.fill_path(Path::polygon(&corners), self.color);
//!     }
//! }
//! ```

pub mod config;
pub mod constraints;
pub mod event;
pub mod painter;
pub mod redraw;
pub mod resources;
pub mod scene;
pub mod widget;
pub mod widgets;

pub use config::{BadgeConfig, ConfigError, CornerGravity};
pub use widgets::CornerBadge;

/// Everything you need to build and host badges.
pub mod prelude {
    pub use crate::config::{BadgeConfig, ConfigError, ConfigErrorKind, CornerGravity};
    pub use crate::constraints::{Constraints, LayoutCtx};
    pub use crate::event::{EventResult, UiEvent};
    pub use crate::painter::Painter;
    pub use crate::redraw::RedrawRequests;
    pub use crate::resources::{ResourceError, Resources};
    pub use crate::scene::UiScene;
    pub use crate::widget::{Element, Widget};
    pub use crate::widgets::{CornerBadge, TextOrigin};

    // Re-export the engine primitives everyone needs.
    pub use cornerbadge_engine::coords::{Path, Rect, Transform, Vec2};
    pub use cornerbadge_engine::paint::Color;
    pub use cornerbadge_engine::text::{FontId, TextLayout, TextMeasure};
}
