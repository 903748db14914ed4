use super::*;

use chrono::TimeZone;

fn author() -> User {
    User {
        id: "3".to_owned(),
        name: "Mike Adventure".to_owned(),
        email: "mike@example.com".to_owned(),
        avatar: String::new(),
        bio: None,
    }
}

fn trip_story() -> ShareTripData {
    ShareTripData {
        content: "Tea gardens of Sreemangal".to_owned(),
        images: Vec::new(),
        location: Some("Sreemangal".to_owned()),
    }
}

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap()
}

#[test]
fn publish_shared_trip_prepends_post_by_author() {
    let mut feed = FeedState::seeded();
    let before = feed.posts.len();

    assert_eq!(publish_shared_trip(&mut feed, Some(&author()), trip_story(), now()), Ok(()));
    assert_eq!(feed.posts.len(), before + 1);
    assert_eq!(feed.posts[0].author.user.id, "3");
    assert_eq!(feed.posts[0].content, "Tea gardens of Sreemangal");
}

#[test]
fn publish_shared_trip_without_author_is_rejected() {
    let mut feed = FeedState::seeded();
    let before = feed.posts.len();

    let result = publish_shared_trip(&mut feed, None, trip_story(), now());
    assert_eq!(result, Err(SubmitError::Rejected(NO_AUTHOR_MESSAGE.to_owned())));
    assert_eq!(feed.posts.len(), before);
}
