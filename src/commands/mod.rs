pub mod adjacent;
pub mod dispatch;
pub mod init;
pub mod ladder;
pub mod neighbors;
pub mod path;
pub mod verify;
