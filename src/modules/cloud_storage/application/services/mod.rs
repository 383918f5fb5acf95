mod download_file_service;
mod list_files_service;
mod upload_file_service;

pub use download_file_service::DownloadFileService;
pub use list_files_service::ListFilesService;
pub use upload_file_service::UploadFileService;
