mod helpers;
mod repository_test;
