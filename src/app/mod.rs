pub use app_::App;
pub use popup::Popup;
pub use scroll_states::ScrollState;
pub use state::State;
use tokio::sync::mpsc;

type MpscTx<T> = mpsc::Sender<T>;

mod app_;
mod popup;
mod scroll_states;
mod state;
