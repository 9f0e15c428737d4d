#[cfg(test)]
mod common;

#[cfg(test)]
mod router_access_tests;

#[cfg(test)]
mod router_redirect_tests;

#[cfg(test)]
mod history_tests;

#[cfg(test)]
mod config_tests;

#[cfg(test)]
mod session_tests;
