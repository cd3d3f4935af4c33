pub mod element;
pub mod event;
pub mod focus;
pub mod form;
pub mod hit;
pub mod keyframes;
pub mod layout;
pub mod radio;
pub mod text;
pub mod types;

pub use element::{find_element, Content, Element};
pub use event::{Event, Key, Modifiers, MouseButton};
pub use focus::{collect_focusable, FocusState};
pub use form::{Form, FormControl, FormData};
pub use hit::{hit_test, hit_test_any, hit_test_focusable};
pub use keyframes::{Easing, KeyframePlayer, Keyframes};
pub use layout::{LayoutResult, Rect};
pub use radio::{RadioGroup, RadioItem, RadioState, Selection};
pub use types::*;
