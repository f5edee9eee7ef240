mod accounts;
mod helpers;
