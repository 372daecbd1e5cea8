/// Mode applied to a generated entry once it is on disk.
///
/// Everything the blueprint writes is plain read-write; `Executable` exists
/// for scripts and makes the writer set the exec bit after the write.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Permissions {
    #[default]
    ReadWrite,
    Executable,
}

impl Permissions {
    pub const fn read_write() -> Self {
        Self::ReadWrite
    }

    pub const fn executable() -> Self {
        Self::Executable
    }

    /// Whether the writer must follow up with `set_permissions(.., true)`.
    pub const fn executable_flag(self) -> bool {
        matches!(self, Self::Executable)
    }
}
