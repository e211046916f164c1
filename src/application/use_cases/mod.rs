/// Use cases module containing application business logic orchestration
mod request_access;
mod show_screen;

pub use request_access::RequestAccessUseCase;
pub use show_screen::ShowScreenUseCase;
