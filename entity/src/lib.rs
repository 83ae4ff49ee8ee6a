pub mod startup;
pub mod user;

/*
 Every startup is owned by exactly one user. Ownership never moves after
 creation and the store does not cascade: deleting a user leaves their
 startup rows behind with a dangling user_id. Admin status is not stored
 anywhere in here, it is derived from the session email at read time.
 */
