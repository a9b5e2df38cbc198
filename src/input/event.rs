/// Platform-agnostic input events fed into
/// [`MeshViewEngine::handle_input`](crate::engine::MeshViewEngine::handle_input).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Cursor moved to an absolute window position (physical pixels).
    CursorMoved {
        /// Horizontal position.
        x: f32,
        /// Vertical position.
        y: f32,
    },
    /// A tracked key was pressed or released.
    Key {
        /// Which key changed.
        key: Key,
        /// `true` for press, `false` for release.
        pressed: bool,
    },
    /// Scroll wheel (positive = zoom in).
    Scroll {
        /// Scroll amount in lines.
        delta: f32,
    },
}

/// The keys the demo reacts to. Everything else never reaches the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Camera forward (W).
    W,
    /// Camera strafe left (A).
    A,
    /// Camera backward (S).
    S,
    /// Camera strafe right (D).
    D,
    /// Model up.
    ArrowUp,
    /// Model down.
    ArrowDown,
    /// Model left.
    ArrowLeft,
    /// Model right.
    ArrowRight,
    /// Model away from the viewer (O).
    O,
    /// Model toward the viewer (L).
    L,
    /// Spin the model (Space).
    Space,
}

#[cfg(feature = "viewer")]
impl Key {
    /// Map a winit key code to a tracked key, if it is one.
    #[must_use]
    pub fn from_key_code(code: winit::keyboard::KeyCode) -> Option<Self> {
        use winit::keyboard::KeyCode;
        match code {
            KeyCode::KeyW => Some(Self::W),
            KeyCode::KeyA => Some(Self::A),
            KeyCode::KeyS => Some(Self::S),
            KeyCode::KeyD => Some(Self::D),
            KeyCode::ArrowUp => Some(Self::ArrowUp),
            KeyCode::ArrowDown => Some(Self::ArrowDown),
            KeyCode::ArrowLeft => Some(Self::ArrowLeft),
            KeyCode::ArrowRight => Some(Self::ArrowRight),
            KeyCode::KeyO => Some(Self::O),
            KeyCode::KeyL => Some(Self::L),
            KeyCode::Space => Some(Self::Space),
            _ => None,
        }
    }
}
