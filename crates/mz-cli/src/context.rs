use mz_chat::ChatBackend;
use mz_store::MemoryFile;

/// Shared session resources initialized once at startup.
pub struct AppContext<C> {
    pub chat: C,
    pub memory: MemoryFile,
}

impl<C: ChatBackend> AppContext<C> {
    pub const fn new(chat: C, memory: MemoryFile) -> Self {
        Self { chat, memory }
    }
}
