//! The pointer-driven gesture state machine.
//!
//! One [`InteractionController`] owns the single active gesture of a
//! diagram. Pointer moves are coalesced through a [`FrameQueue`] and turned
//! into previews once per frame; the schema is only touched through a
//! [`DiagramHost`] when the gesture completes.

use std::{fmt, mem, str::FromStr};

use log::{debug, trace};

use folio_core::{
    geometry::{Point, Size},
    model::{Boundable, DatabaseSchema, EntityKey},
};

use crate::{
    graph::RelationshipGraph,
    interaction::{
        frame::FrameQueue,
        highlight::HighlightState,
        host::{DiagramHost, commit_position, commit_size},
        snap::{drag_position, is_click, resize_dimension},
    },
    pagination::PageGeometry,
    transform::ScreenTransform,
};

/// Corner of a shape or label carrying a resize affordance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResizeCorner {
    NorthWest,
    NorthEast,
    SouthWest,
    SouthEast,
}

impl ResizeCorner {
    pub fn name(self) -> &'static str {
        match self {
            Self::NorthWest => "nw",
            Self::NorthEast => "ne",
            Self::SouthWest => "sw",
            Self::SouthEast => "se",
        }
    }
}

impl fmt::Display for ResizeCorner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ResizeCorner {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "nw" => Ok(Self::NorthWest),
            "ne" => Ok(Self::NorthEast),
            "sw" => Ok(Self::SouthWest),
            "se" => Ok(Self::SouthEast),
            other => Err(format!("unknown resize corner `{other}`")),
        }
    }
}

/// What the pointer was over when an event fired.
#[derive(Debug, Clone, PartialEq)]
pub enum PointerTarget {
    Entity(EntityKey),
    ResizeHandle { key: EntityKey, corner: ResizeCorner },
    /// An input or button embedded in a box
    FormControl,
    Background,
}

/// A pointer event in screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerEvent {
    position: Point,
    ctrl: bool,
    shift: bool,
}

impl PointerEvent {
    pub fn new(x: f64, y: f64) -> Self {
        Self::at(Point::new(x, y))
    }

    pub fn at(position: Point) -> Self {
        Self {
            position,
            ctrl: false,
            shift: false,
        }
    }

    pub fn with_ctrl(mut self, ctrl: bool) -> Self {
        self.ctrl = ctrl;
        self
    }

    pub fn with_shift(mut self, shift: bool) -> Self {
        self.shift = shift;
        self
    }

    pub fn position(&self) -> Point {
        self.position
    }

    /// Whether a click should toggle rather than replace the selection
    pub fn is_additive(&self) -> bool {
        self.ctrl || self.shift
    }
}

/// The externally visible state of the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    /// Pointer is down on an entity but has not moved yet
    PendingDrag,
    Dragging,
    Resizing,
}

/// A relationship line attached to the dragged box, in canvas units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinePreview {
    pub relationship: usize,
    pub from: Point,
    pub to: Point,
}

/// The visual-only result of the latest frame.
#[derive(Debug, Clone, PartialEq)]
pub enum Preview {
    Move {
        key: EntityKey,
        position: Point,
        lines: Vec<LinePreview>,
    },
    Resize {
        key: EntityKey,
        size: Size,
    },
}

/// How a gesture ended.
#[derive(Debug, Clone, PartialEq)]
pub enum GestureOutcome {
    Ignored,
    Selected { key: EntityKey, additive: bool },
    DeselectedAll,
    Moved { key: EntityKey, position: Point },
    Resized { key: EntityKey, size: Size },
}

/// A relationship captured at pointer-down, with the far end pinned.
#[derive(Debug, Clone, Copy)]
struct AttachedLine {
    relationship: usize,
    dragged_is_from: bool,
    self_loop: bool,
    other_center: Point,
}

#[derive(Debug, Clone)]
struct DragState {
    key: EntityKey,
    down: Point,
    grab_offset: Point,
    half_size: Size,
    lines: Vec<AttachedLine>,
    current: Option<Point>,
    moved: bool,
}

impl DragState {
    fn line_previews(&self, position: Point) -> Vec<LinePreview> {
        let center = Point::new(
            position.x() + self.half_size.width(),
            position.y() + self.half_size.height(),
        );

        self.lines
            .iter()
            .map(|line| {
                let (from, to) = if line.self_loop {
                    (center, center)
                } else if line.dragged_is_from {
                    (center, line.other_center)
                } else {
                    (line.other_center, center)
                };
                LinePreview {
                    relationship: line.relationship,
                    from,
                    to,
                }
            })
            .collect()
    }
}

#[derive(Debug, Clone)]
struct ResizeState {
    key: EntityKey,
    corner: ResizeCorner,
    down: Point,
    initial_size: Size,
    current: Option<Size>,
}

#[derive(Debug, Clone, Default)]
enum Gesture {
    #[default]
    Idle,
    Drag(DragState),
    Resize(ResizeState),
}

/// Owns the active gesture, the frame queue and the hover highlight.
#[derive(Debug, Clone)]
pub struct InteractionController {
    geometry: PageGeometry,
    page_snap: bool,
    transform: ScreenTransform,
    gesture: Gesture,
    frames: FrameQueue<Point>,
    highlight: HighlightState,
}

impl Default for InteractionController {
    fn default() -> Self {
        Self::new(PageGeometry::default())
    }
}

impl InteractionController {
    /// Creates an idle controller with page-gap snapping enabled
    pub fn new(geometry: PageGeometry) -> Self {
        Self {
            geometry,
            page_snap: true,
            transform: ScreenTransform::default(),
            gesture: Gesture::Idle,
            frames: FrameQueue::new(),
            highlight: HighlightState::default(),
        }
    }

    pub fn with_page_snap(mut self, page_snap: bool) -> Self {
        self.page_snap = page_snap;
        self
    }

    pub fn with_transform(mut self, transform: ScreenTransform) -> Self {
        self.transform = transform;
        self
    }

    pub fn transform(&self) -> &ScreenTransform {
        &self.transform
    }

    pub fn phase(&self) -> Phase {
        match &self.gesture {
            Gesture::Idle => Phase::Idle,
            Gesture::Drag(drag) if drag.moved => Phase::Dragging,
            Gesture::Drag(_) => Phase::PendingDrag,
            Gesture::Resize(_) => Phase::Resizing,
        }
    }

    /// Returns true while a gesture is in progress
    pub fn is_active(&self) -> bool {
        !matches!(self.gesture, Gesture::Idle)
    }

    pub fn highlight(&self) -> &HighlightState {
        &self.highlight
    }

    /// Starts a gesture.
    ///
    /// Returns false when the event is ignored: a gesture is already active,
    /// the target is not draggable, or the entity no longer exists.
    pub fn pointer_down(
        &mut self,
        schema: &DatabaseSchema,
        target: &PointerTarget,
        event: PointerEvent,
    ) -> bool {
        if self.is_active() {
            debug!(phase:? = self.phase(); "Pointer down ignored during active gesture");
            return false;
        }

        match target {
            PointerTarget::Entity(key) => self.start_drag(schema, key, event.position()),
            PointerTarget::ResizeHandle { key, corner } => {
                self.start_resize(schema, key, *corner, event.position())
            }
            PointerTarget::FormControl | PointerTarget::Background => false,
        }
    }

    fn start_drag(&mut self, schema: &DatabaseSchema, key: &EntityKey, down: Point) -> bool {
        let Some(entity) = schema.find(key) else {
            debug!(entity:% = key; "Pointer down on unknown entity");
            return false;
        };

        let grab_offset = self.transform.to_canvas(down).sub_point(entity.position());
        let size = entity.bounds().to_size();

        let lines = if key.is_box() {
            attached_lines(schema, key)
        } else {
            Vec::new()
        };

        debug!(entity:% = key, lines = lines.len(); "Drag pending");
        self.gesture = Gesture::Drag(DragState {
            key: key.clone(),
            down,
            grab_offset,
            half_size: size.scale(0.5),
            lines,
            current: None,
            moved: false,
        });
        true
    }

    fn start_resize(
        &mut self,
        schema: &DatabaseSchema,
        key: &EntityKey,
        corner: ResizeCorner,
        down: Point,
    ) -> bool {
        if key.is_box() {
            debug!(entity:% = key; "Tables and views cannot be resized");
            return false;
        }
        let Some(entity) = schema.find(key) else {
            debug!(entity:% = key; "Pointer down on unknown entity");
            return false;
        };

        debug!(entity:% = key, corner:% = corner; "Resize started");
        self.gesture = Gesture::Resize(ResizeState {
            key: key.clone(),
            corner,
            down,
            initial_size: entity.bounds().to_size(),
            current: None,
        });
        true
    }

    /// Queues a pointer move for the next frame.
    ///
    /// Returns false when no gesture is active.
    pub fn pointer_move(&mut self, event: PointerEvent) -> bool {
        match &mut self.gesture {
            Gesture::Idle => return false,
            Gesture::Drag(drag) => drag.moved = true,
            Gesture::Resize(_) => {}
        }

        if self.frames.schedule(event.position()) {
            trace!("Pending frame replaced");
        }
        true
    }

    /// Applies the pending pointer move, if any, and returns the new preview
    pub fn on_frame(&mut self) -> Option<Preview> {
        let screen = self.frames.take()?;
        let pages = self.page_snap.then_some(&self.geometry);
        let transform = self.transform;

        match &mut self.gesture {
            Gesture::Idle => None,
            Gesture::Drag(drag) => {
                let position = drag_target(&transform, drag, screen, pages);
                drag.current = Some(position);
                trace!(x = position.x(), y = position.y(); "Drag frame");
                Some(Preview::Move {
                    key: drag.key.clone(),
                    position,
                    lines: drag.line_previews(position),
                })
            }
            Gesture::Resize(resize) => {
                let size = resize_target(&transform, resize, screen);
                resize.current = Some(size);
                trace!(width = size.width(), height = size.height(); "Resize frame");
                Some(Preview::Resize {
                    key: resize.key.clone(),
                    size,
                })
            }
        }
    }

    /// The preview produced by the most recent frame
    pub fn preview(&self) -> Option<Preview> {
        match &self.gesture {
            Gesture::Idle => None,
            Gesture::Drag(drag) => drag.current.map(|position| Preview::Move {
                key: drag.key.clone(),
                position,
                lines: drag.line_previews(position),
            }),
            Gesture::Resize(resize) => resize.current.map(|size| Preview::Resize {
                key: resize.key.clone(),
                size,
            }),
        }
    }

    /// Ends the gesture and commits its result to `host`.
    ///
    /// Any pending frame is dropped; the final value is computed from the
    /// pointer-up coordinates so exactly one update reaches the host.
    pub fn pointer_up<H: DiagramHost + ?Sized>(
        &mut self,
        host: &mut H,
        target: &PointerTarget,
        event: PointerEvent,
    ) -> GestureOutcome {
        self.frames.cancel();
        let pages = self.page_snap.then_some(&self.geometry);
        let up = event.position();

        match mem::take(&mut self.gesture) {
            Gesture::Idle => match target {
                PointerTarget::Background => {
                    host.deselect_all();
                    GestureOutcome::DeselectedAll
                }
                _ => GestureOutcome::Ignored,
            },
            Gesture::Drag(drag) => {
                if is_click(drag.down, up) {
                    let additive = event.is_additive();
                    host.select_object(drag.key.id(), drag.key.kind(), additive);
                    debug!(entity:% = drag.key, additive; "Click selected entity");
                    return GestureOutcome::Selected {
                        key: drag.key,
                        additive,
                    };
                }

                let position = drag_target(&self.transform, &drag, up, pages);
                commit_position(host, &drag.key, position);
                debug!(entity:% = drag.key, x = position.x(), y = position.y(); "Drag committed");
                GestureOutcome::Moved {
                    key: drag.key,
                    position,
                }
            }
            Gesture::Resize(resize) => {
                if is_click(resize.down, up) || resize.corner != ResizeCorner::SouthEast {
                    debug!(entity:% = resize.key, corner:% = resize.corner; "Resize ended without change");
                    return GestureOutcome::Ignored;
                }

                let size = resize_target(&self.transform, &resize, up);
                commit_size(host, &resize.key, size);
                debug!(
                    entity:% = resize.key,
                    width = size.width(),
                    height = size.height();
                    "Resize committed"
                );
                GestureOutcome::Resized {
                    key: resize.key,
                    size,
                }
            }
        }
    }

    /// Abandons the active gesture without committing anything
    pub fn cancel(&mut self) -> bool {
        self.frames.cancel();
        let was_active = self.is_active();
        self.gesture = Gesture::Idle;
        was_active
    }

    /// Highlights the connected component of a hovered table or view.
    ///
    /// Ignored during gestures and for shapes, labels and unknown entities.
    pub fn hover_enter(&mut self, schema: &DatabaseSchema, key: &EntityKey) -> bool {
        if self.is_active() || !key.is_box() || schema.find(key).is_none() {
            return false;
        }

        let graph = RelationshipGraph::build(schema);
        self.highlight = HighlightState::focus_on(&graph, key);
        trace!(entity:% = key; "Hover highlight");
        true
    }

    /// Clears every dim and highlight flag. Returns true if any were set.
    pub fn hover_leave(&mut self) -> bool {
        let was_active = self.highlight.is_active();
        self.highlight.clear();
        was_active
    }
}

fn drag_target(
    transform: &ScreenTransform,
    drag: &DragState,
    screen: Point,
    pages: Option<&PageGeometry>,
) -> Point {
    let raw = transform.to_canvas(screen).sub_point(drag.grab_offset);
    drag_position(raw, pages)
}

fn resize_target(transform: &ScreenTransform, resize: &ResizeState, screen: Point) -> Size {
    if resize.corner != ResizeCorner::SouthEast {
        return resize.initial_size;
    }

    let delta = transform.delta_to_canvas(screen.sub_point(resize.down));
    Size::new(
        resize_dimension(resize.initial_size.width(), delta.x()),
        resize_dimension(resize.initial_size.height(), delta.y()),
    )
}

fn attached_lines(schema: &DatabaseSchema, key: &EntityKey) -> Vec<AttachedLine> {
    let graph = RelationshipGraph::build(schema);
    let name = key.id();

    graph
        .connections(name)
        .into_iter()
        .map(|resolved| {
            let relationship = resolved.relationship();
            let self_loop = relationship.from_table == relationship.to_table;
            let dragged_is_from = relationship.from_table == name;
            let other = if dragged_is_from {
                resolved.to()
            } else {
                resolved.from()
            };

            AttachedLine {
                relationship: resolved.index(),
                dragged_is_from,
                self_loop,
                other_center: other.bounds().center(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use folio_core::model::{Column, Label, Relationship, Shape, Table};

    use super::*;
    use crate::interaction::host::Editor;

    fn orders_schema() -> DatabaseSchema {
        let mut schema = DatabaseSchema::new();
        schema.tables.push(
            Table::new("dbo", "Orders")
                .with_position(40.0, 40.0)
                .add_column(Column::new("Id", "int").primary_key())
                .add_column(Column::new("CustomerId", "int").foreign_key()),
        );
        schema.tables.push(
            Table::new("dbo", "Customers")
                .with_position(400.0, 40.0)
                .add_column(Column::new("Id", "int").primary_key()),
        );
        schema
            .relationships
            .push(Relationship::new("dbo.Orders", "CustomerId", "dbo.Customers", "Id"));
        schema
    }

    fn orders() -> EntityKey {
        EntityKey::Table("dbo.Orders".to_string())
    }

    #[test]
    fn test_small_gesture_selects() {
        let mut editor = Editor::new(orders_schema());
        let mut controller = InteractionController::default();
        let target = PointerTarget::Entity(orders());

        assert!(controller.pointer_down(editor.schema(), &target, PointerEvent::new(50.0, 50.0)));
        assert_eq!(controller.phase(), Phase::PendingDrag);

        controller.pointer_move(PointerEvent::new(53.0, 52.0));
        assert_eq!(controller.phase(), Phase::Dragging);

        let outcome = controller.pointer_up(&mut editor, &target, PointerEvent::new(53.0, 52.0));
        assert_eq!(
            outcome,
            GestureOutcome::Selected {
                key: orders(),
                additive: false
            }
        );
        assert!(editor.selection().contains(&orders()));
        assert_eq!((editor.schema().tables[0].x, editor.schema().tables[0].y), (40.0, 40.0));
        assert_eq!(controller.phase(), Phase::Idle);
    }

    #[test]
    fn test_modifier_click_is_additive() {
        let mut editor = Editor::new(orders_schema());
        let mut controller = InteractionController::default();
        let target = PointerTarget::Entity(orders());

        controller.pointer_down(editor.schema(), &target, PointerEvent::new(50.0, 50.0));
        let outcome =
            controller.pointer_up(&mut editor, &target, PointerEvent::new(50.0, 50.0).with_shift(true));
        assert_eq!(
            outcome,
            GestureOutcome::Selected {
                key: orders(),
                additive: true
            }
        );
    }

    #[test]
    fn test_drag_commits_snapped_position_once() {
        let mut editor = Editor::new(orders_schema());
        let mut controller = InteractionController::default();
        let target = PointerTarget::Entity(orders());

        controller.pointer_down(editor.schema(), &target, PointerEvent::new(50.0, 50.0));
        for step in 1..=10 {
            controller.pointer_move(PointerEvent::new(50.0 + step as f64 * 10.0, 50.0));
        }
        let preview = controller.on_frame();
        assert!(matches!(preview, Some(Preview::Move { position, .. }) if position == Point::new(140.0, 40.0)));
        assert!(controller.on_frame().is_none());

        controller.pointer_move(PointerEvent::new(175.0, 83.0));
        let outcome = controller.pointer_up(&mut editor, &target, PointerEvent::new(177.0, 84.0));

        // Offset within the box is (10, 10); raw position (167, 74)
        assert_eq!(
            outcome,
            GestureOutcome::Moved {
                key: orders(),
                position: Point::new(160.0, 80.0)
            }
        );
        assert_eq!((editor.schema().tables[0].x, editor.schema().tables[0].y), (160.0, 80.0));
        assert!(controller.on_frame().is_none());
        assert!(editor.selection().is_empty());
    }

    #[test]
    fn test_zoomed_drag_uses_canvas_units() {
        let mut editor = Editor::new(orders_schema());
        let mut controller = InteractionController::default().with_transform(ScreenTransform::new(2.0, Point::default()));
        let target = PointerTarget::Entity(orders());

        // Screen (100, 100) is canvas (50, 50)
        controller.pointer_down(editor.schema(), &target, PointerEvent::new(100.0, 100.0));
        let outcome = controller.pointer_up(&mut editor, &target, PointerEvent::new(300.0, 100.0));

        assert_eq!(
            outcome,
            GestureOutcome::Moved {
                key: orders(),
                position: Point::new(140.0, 40.0)
            }
        );
    }

    #[test]
    fn test_drag_into_gap_snaps_to_page_edge() {
        let mut schema = DatabaseSchema::new();
        let shape = schema.add_shape(Shape::new(0.0, 0.0));
        let mut editor = Editor::new(schema);
        let mut controller = InteractionController::new(PageGeometry::new(3072.0, 3456.0, 20.0));
        let target = PointerTarget::Entity(shape.clone());

        controller.pointer_down(editor.schema(), &target, PointerEvent::new(0.0, 0.0));
        let outcome = controller.pointer_up(&mut editor, &target, PointerEvent::new(3081.0, 15.0));
        assert_eq!(
            outcome,
            GestureOutcome::Moved {
                key: shape.clone(),
                position: Point::new(3022.0, 20.0)
            }
        );

        let mut controller = controller.with_page_snap(false);
        controller.pointer_down(editor.schema(), &target, PointerEvent::new(3022.0, 20.0));
        let outcome = controller.pointer_up(&mut editor, &target, PointerEvent::new(3081.0, 20.0));
        assert_eq!(
            outcome,
            GestureOutcome::Moved {
                key: shape,
                position: Point::new(3080.0, 20.0)
            }
        );
    }

    #[test]
    fn test_second_pointer_down_ignored() {
        let schema = orders_schema();
        let mut controller = InteractionController::default();
        let customers = EntityKey::Table("dbo.Customers".to_string());

        assert!(controller.pointer_down(&schema, &PointerTarget::Entity(orders()), PointerEvent::new(50.0, 50.0)));
        assert!(!controller.pointer_down(&schema, &PointerTarget::Entity(customers), PointerEvent::new(410.0, 50.0)));
        assert!(matches!(&controller.gesture, Gesture::Drag(drag) if drag.key == orders()));
    }

    #[test]
    fn test_ignored_targets() {
        let schema = orders_schema();
        let mut controller = InteractionController::default();

        assert!(!controller.pointer_down(&schema, &PointerTarget::FormControl, PointerEvent::new(0.0, 0.0)));
        assert!(!controller.pointer_down(
            &schema,
            &PointerTarget::ResizeHandle {
                key: orders(),
                corner: ResizeCorner::SouthEast
            },
            PointerEvent::new(0.0, 0.0)
        ));
        assert!(!controller.pointer_down(
            &schema,
            &PointerTarget::Entity(EntityKey::Table("dbo.Missing".to_string())),
            PointerEvent::new(0.0, 0.0)
        ));
        assert!(!controller.pointer_move(PointerEvent::new(10.0, 10.0)));
        assert_eq!(controller.phase(), Phase::Idle);
    }

    #[test]
    fn test_background_click_deselects() {
        let mut editor = Editor::new(orders_schema());
        editor.select_object("dbo.Orders", folio_core::model::EntityKind::Table, false);
        let mut controller = InteractionController::default();

        let outcome = controller.pointer_up(&mut editor, &PointerTarget::Background, PointerEvent::new(5.0, 5.0));
        assert_eq!(outcome, GestureOutcome::DeselectedAll);
        assert!(editor.selection().is_empty());
    }

    #[test]
    fn test_resize_south_east() {
        let mut schema = DatabaseSchema::new();
        let label = schema.add_label(Label::new(100.0, 100.0).with_size(150.0, 40.0));
        let mut editor = Editor::new(schema);
        let mut controller = InteractionController::default();
        let target = PointerTarget::ResizeHandle {
            key: label.clone(),
            corner: ResizeCorner::SouthEast,
        };

        assert!(controller.pointer_down(editor.schema(), &target, PointerEvent::new(250.0, 140.0)));
        assert_eq!(controller.phase(), Phase::Resizing);

        controller.pointer_move(PointerEvent::new(280.0, 50.0));
        let preview = controller.on_frame();
        assert_eq!(
            preview,
            Some(Preview::Resize {
                key: label.clone(),
                size: Size::new(180.0, 20.0)
            })
        );
        assert_eq!(controller.preview(), preview);

        let outcome = controller.pointer_up(&mut editor, &target, PointerEvent::new(287.0, 171.0));
        assert_eq!(
            outcome,
            GestureOutcome::Resized {
                key: label,
                size: Size::new(180.0, 80.0)
            }
        );
        assert_approx_eq!(f64, editor.schema().labels[0].width, 180.0);
        assert_approx_eq!(f64, editor.schema().labels[0].height, 80.0);
    }

    #[test]
    fn test_other_corners_leave_size_unchanged() {
        let mut schema = DatabaseSchema::new();
        let shape = schema.add_shape(Shape::new(0.0, 0.0));
        let mut editor = Editor::new(schema);
        let mut controller = InteractionController::default();
        let target = PointerTarget::ResizeHandle {
            key: shape,
            corner: ResizeCorner::NorthWest,
        };

        controller.pointer_down(editor.schema(), &target, PointerEvent::new(0.0, 0.0));
        let outcome = controller.pointer_up(&mut editor, &target, PointerEvent::new(-60.0, -60.0));
        assert_eq!(outcome, GestureOutcome::Ignored);
        assert_approx_eq!(f64, editor.schema().shapes[0].width, 100.0);
    }

    #[test]
    fn test_drag_previews_attached_lines() {
        let schema = orders_schema();
        let mut controller = InteractionController::default();
        let target = PointerTarget::Entity(orders());

        controller.pointer_down(&schema, &target, PointerEvent::new(40.0, 40.0));
        controller.pointer_move(PointerEvent::new(100.0, 40.0));
        let Some(Preview::Move { position, lines, .. }) = controller.on_frame() else {
            panic!("expected a move preview");
        };

        assert_eq!(position, Point::new(100.0, 40.0));
        assert_eq!(lines.len(), 1);
        // Orders is 200 x 49, Customers 200 x 33
        assert_eq!(lines[0].from, Point::new(200.0, 64.5));
        assert_eq!(lines[0].to, Point::new(500.0, 56.5));
    }

    #[test]
    fn test_hover_highlight_ignored_during_gesture() {
        let schema = orders_schema();
        let mut controller = InteractionController::default();

        assert!(controller.hover_enter(&schema, &orders()));
        assert!(controller.highlight().is_active());
        assert!(controller.hover_leave());
        assert!(!controller.highlight().is_active());

        controller.pointer_down(&schema, &PointerTarget::Entity(orders()), PointerEvent::new(50.0, 50.0));
        assert!(!controller.hover_enter(&schema, &orders()));
        assert!(controller.cancel());
        assert!(!controller.is_active());
    }

    #[test]
    fn test_resize_corner_from_str() {
        assert_eq!("se".parse::<ResizeCorner>(), Ok(ResizeCorner::SouthEast));
        assert_eq!("NW".parse::<ResizeCorner>(), Ok(ResizeCorner::NorthWest));
        assert!("middle".parse::<ResizeCorner>().is_err());
    }
}
