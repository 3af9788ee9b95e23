//! Surface - the display container handed to the active effect
//!
//! One surface exists per effect kind and is owned exclusively by the
//! active effect between `activate` and `teardown`. The host is the
//! only actor that hands ownership from one effect to the next, and it
//! clears the surface itself during a switch so an incomplete teardown
//! cannot leave stale content behind.

/// Abstract display container an effect renders into.
///
/// Real frontends back this with a DOM node, a terminal frame, or a
/// framebuffer region; tests use an in-memory implementation.
pub trait Surface {
    /// Remove all rendered content
    fn clear(&mut self);

    /// Set or remove the surface's presentation class
    fn set_class(&mut self, class: Option<&str>);

    /// Append a rendered node
    fn push(&mut self, node: &str);

    /// Current size in columns and rows
    ///
    /// Effects that size their output to the container re-read this
    /// from their `on_resize` hook; the surface does not notify them.
    fn size(&self) -> (u16, u16);
}
