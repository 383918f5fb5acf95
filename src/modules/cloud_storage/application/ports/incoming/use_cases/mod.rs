mod download_file;
mod list_files;
mod upload_file;

pub use download_file::DownloadFileUseCase;
pub use list_files::{ListFilesError, ListFilesUseCase};
pub use upload_file::{UploadFileCommand, UploadFileError, UploadFileUseCase};
