mod domains;
mod helpers;
mod login;
mod logout;
mod register;
