pub mod mosaic;
pub mod palette;
pub mod session;

pub use mosaic::{handle_mosaic, BoardCount, MosaicRequest, __path_handle_mosaic};
pub use palette::{handle_palette, __path_handle_palette};
pub use session::{
    handle_create_session, handle_delete_session, handle_get_session, handle_session_event,
    CreateSessionRequest, EditorEvent, PointerButton, SessionResponse, ViewData,
    __path_handle_create_session, __path_handle_delete_session, __path_handle_get_session,
    __path_handle_session_event,
};
