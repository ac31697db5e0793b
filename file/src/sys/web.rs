use std::path::Path;

/// A handle backed by a DOM `File` object.
#[derive(Debug, Clone)]
pub struct FileInner {
    file: web_sys::File,
}

impl FileInner {
    pub(crate) const fn from_web_file(file: web_sys::File) -> Self {
        Self { file }
    }

    pub(crate) fn name(&self) -> String {
        self.file.name()
    }

    pub(crate) fn path(&self) -> Option<&Path> {
        None
    }

    pub(crate) const fn web_file(&self) -> &web_sys::File {
        &self.file
    }
}
