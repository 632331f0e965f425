pub mod follow;
pub mod message;
pub mod user;

/*
 A user owns their messages; dropping the user drops the messages with them.
 Following is a directed edge in `follows`: (user_being_followed_id,
 user_following_id) is the primary key, so an edge either exists once or not
 at all. "A follows B" is stored as followed = B, follower = A.
 */
