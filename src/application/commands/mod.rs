pub mod article_folders;
