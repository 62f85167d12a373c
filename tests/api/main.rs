mod event_loop;
mod helpers;
mod validation;
