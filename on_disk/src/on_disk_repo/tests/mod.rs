mod get_object;
mod init;
