pub mod avatars;
pub mod directory;
pub mod participants;
