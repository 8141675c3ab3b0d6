pub mod user;

/*
 Accounts are keyed on email. Registration is the only writer: a row is
 created once and never mutated or deleted by this service. The unique
 index on email is what settles concurrent duplicate signups.
 */
