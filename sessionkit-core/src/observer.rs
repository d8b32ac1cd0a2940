/// Callbacks through which a [`crate::SessionContext`] reports side effects
/// to the embedding application.
///
/// The context never touches a router or a notification widget directly; it
/// emits these events and the host decides how to present them. Implement
/// this against the application's navigation and notification surfaces.
///
/// # Examples
///
/// ```rust
/// use sessionkit_core::SessionObserver;
///
/// struct LoggingObserver;
///
/// impl SessionObserver for LoggingObserver {
///     fn navigate_home(&self) {
///         println!("-> /");
///     }
///
///     fn session_error(&self, message: String) {
///         eprintln!("session error: {message}");
///     }
/// }
/// ```
pub trait SessionObserver: Send + Sync {
    /// Requests navigation to the application's home route.
    ///
    /// Emitted after a successful login and after every logout, forced or
    /// explicit.
    fn navigate_home(&self);

    /// Surfaces an operation failure to the user.
    ///
    /// Emitted when a login or session check fails for any reason, including
    /// the role check. The message is the display form of the underlying
    /// [`crate::SessionError`].
    fn session_error(&self, message: String);
}
