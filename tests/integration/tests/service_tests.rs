//! Service-layer tests
//!
//! Exercise the services against in-memory repository doubles, covering
//! the OTP login flow, reaction toggling with counter maintenance,
//! comments, bookmarks, and media uploads.
//!
//! Run with: cargo test -p integration-tests --test service_tests

use chrono::Utc;
use integration_tests::TestHarness;
use tube_core::{MediaFile, OtpEntry, PhoneNumber};
use tube_service::{
    AuthService, BookmarkService, CommentService, CreateCommentRequest, CreatePlaylistRequest,
    PlaylistService, ReactionRequest, ReactionService, SendOtpRequest, UpdatePlaylistRequest,
    UpdateProfileRequest, UpdateVideoRequest, UploadService, UserService, VerifyOtpRequest,
    VideoService,
};

const PHONE: &str = "+911234567890";

fn send_otp_request() -> SendOtpRequest {
    SendOtpRequest {
        phone_number: PHONE.to_string(),
    }
}

fn verify_request(code: &str) -> VerifyOtpRequest {
    VerifyOtpRequest {
        phone_number: PHONE.to_string(),
        code: code.to_string(),
    }
}

// ============================================================================
// OTP Login Flow
// ============================================================================

#[tokio::test]
async fn test_otp_flow_issues_token_in_dev_mode() {
    let harness = TestHarness::new();
    let auth = AuthService::new(&harness.ctx);

    let issued = auth.send_otp(send_otp_request()).await.unwrap();
    assert!(!issued.sent, "no SMS provider configured");
    let code = issued.dev_otp.expect("dev mode surfaces the code");

    let response = auth.verify_otp(verify_request(&code)).await.unwrap();
    assert!(!response.token.is_empty());
    assert_eq!(response.token_type, "Bearer");
    assert_eq!(response.user.phone_number, PHONE);
    assert_eq!(response.user.role, "user");
}

#[tokio::test]
async fn test_otp_code_cannot_be_replayed() {
    let harness = TestHarness::new();
    let auth = AuthService::new(&harness.ctx);

    let issued = auth.send_otp(send_otp_request()).await.unwrap();
    let code = issued.dev_otp.unwrap();

    auth.verify_otp(verify_request(&code)).await.unwrap();

    let replay = auth.verify_otp(verify_request(&code)).await;
    let err = replay.expect_err("consumed code must be rejected");
    assert_eq!(err.status_code(), 401);
}

#[tokio::test]
async fn test_wrong_otp_code_is_rejected() {
    let harness = TestHarness::new();
    let auth = AuthService::new(&harness.ctx);

    auth.send_otp(send_otp_request()).await.unwrap();

    let err = auth
        .verify_otp(verify_request("000000"))
        .await
        .expect_err("wrong code must be rejected");
    assert_eq!(err.status_code(), 401);
}

#[tokio::test]
async fn test_resending_replaces_the_previous_code() {
    let harness = TestHarness::new();
    let auth = AuthService::new(&harness.ctx);

    let first = auth.send_otp(send_otp_request()).await.unwrap();
    let second = auth.send_otp(send_otp_request()).await.unwrap();
    let old_code = first.dev_otp.unwrap();
    let new_code = second.dev_otp.unwrap();

    if old_code != new_code {
        assert!(auth.verify_otp(verify_request(&old_code)).await.is_err());
    }
    assert!(auth.verify_otp(verify_request(&new_code)).await.is_ok());
}

#[tokio::test]
async fn test_expired_otp_code_is_rejected() {
    let harness = TestHarness::new();
    let auth = AuthService::new(&harness.ctx);

    let phone = PhoneNumber::parse(PHONE).unwrap();
    let entry = OtpEntry::new(phone, "123456".to_string(), Utc::now(), -1);
    use tube_core::OtpRepository;
    harness.backend.replace(&entry).await.unwrap();

    let err = auth
        .verify_otp(verify_request("123456"))
        .await
        .expect_err("expired code must be rejected");
    assert_eq!(err.status_code(), 401);
}

#[tokio::test]
async fn test_configured_provider_hides_the_code() {
    let harness = TestHarness::with_options(true, true);
    let auth = AuthService::new(&harness.ctx);

    let issued = auth.send_otp(send_otp_request()).await.unwrap();
    assert!(issued.sent);
    assert!(issued.dev_otp.is_none());

    let sent = harness.notifier.sent.lock().unwrap();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].0, PHONE);
}

#[tokio::test]
async fn test_sms_failure_does_not_fail_issuance() {
    // production mode, provider erroring on every send
    let harness = TestHarness::with_failing_sms();
    let auth = AuthService::new(&harness.ctx);

    let issued = auth.send_otp(send_otp_request()).await.unwrap();
    assert!(!issued.sent);
    assert!(issued.dev_otp.is_none(), "production never leaks the code");

    // the stored code survived the delivery failure and still verifies
    let phone = PhoneNumber::parse(PHONE).unwrap();
    let code = harness.backend.stored_otp(&phone).unwrap();
    let response = auth.verify_otp(verify_request(&code)).await.unwrap();
    assert!(!response.token.is_empty());
}

#[tokio::test]
async fn test_repeat_login_reuses_the_account() {
    let harness = TestHarness::new();
    let auth = AuthService::new(&harness.ctx);

    let code = auth.send_otp(send_otp_request()).await.unwrap().dev_otp.unwrap();
    let first = auth.verify_otp(verify_request(&code)).await.unwrap();

    let code = auth.send_otp(send_otp_request()).await.unwrap().dev_otp.unwrap();
    let second = auth.verify_otp(verify_request(&code)).await.unwrap();

    assert_eq!(first.user.id, second.user.id);
}

#[tokio::test]
async fn test_sweep_removes_consumed_codes() {
    let harness = TestHarness::new();
    let auth = AuthService::new(&harness.ctx);

    let code = auth.send_otp(send_otp_request()).await.unwrap().dev_otp.unwrap();
    auth.verify_otp(verify_request(&code)).await.unwrap();

    let removed = auth.sweep_expired_otps().await.unwrap();
    assert_eq!(removed, 1);
}

// ============================================================================
// Reactions
// ============================================================================

async fn signed_in_user(harness: &TestHarness, phone: &str) -> uuid::Uuid {
    let auth = AuthService::new(&harness.ctx);
    let issued = auth
        .send_otp(SendOtpRequest {
            phone_number: phone.to_string(),
        })
        .await
        .unwrap();
    let response = auth
        .verify_otp(VerifyOtpRequest {
            phone_number: phone.to_string(),
            code: issued.dev_otp.unwrap(),
        })
        .await
        .unwrap();
    response.user.id
}

fn like() -> ReactionRequest {
    ReactionRequest {
        reaction_type: "like".to_string(),
    }
}

fn dislike() -> ReactionRequest {
    ReactionRequest {
        reaction_type: "dislike".to_string(),
    }
}

#[tokio::test]
async fn test_like_toggle_on_and_off() {
    let harness = TestHarness::new();
    let user = signed_in_user(&harness, PHONE).await;
    let video = harness.backend.insert_video("Intro", None);
    let reactions = ReactionService::new(&harness.ctx);

    let on = reactions.toggle(user, video, like()).await.unwrap();
    assert_eq!(on.reaction.as_deref(), Some("like"));
    assert_eq!(on.like_count, 1);
    assert_eq!(on.dislike_count, 0);

    let off = reactions.toggle(user, video, like()).await.unwrap();
    assert_eq!(off.reaction, None);
    assert_eq!(off.like_count, 0);
    assert_eq!(off.dislike_count, 0);
}

#[tokio::test]
async fn test_switching_reaction_moves_the_counter() {
    let harness = TestHarness::new();
    let user = signed_in_user(&harness, PHONE).await;
    let video = harness.backend.insert_video("Intro", None);
    let reactions = ReactionService::new(&harness.ctx);

    reactions.toggle(user, video, like()).await.unwrap();
    let switched = reactions.toggle(user, video, dislike()).await.unwrap();

    assert_eq!(switched.reaction.as_deref(), Some("dislike"));
    assert_eq!(switched.like_count, 0);
    assert_eq!(switched.dislike_count, 1);
}

#[tokio::test]
async fn test_reactions_from_multiple_users_accumulate() {
    let harness = TestHarness::new();
    let first = signed_in_user(&harness, "+911111111111").await;
    let second = signed_in_user(&harness, "+912222222222").await;
    let video = harness.backend.insert_video("Intro", None);
    let reactions = ReactionService::new(&harness.ctx);

    reactions.toggle(first, video, like()).await.unwrap();
    let after = reactions.toggle(second, video, like()).await.unwrap();

    assert_eq!(after.like_count, 2);
}

#[tokio::test]
async fn test_reaction_lookup_without_signin_gives_counters_only() {
    let harness = TestHarness::new();
    let user = signed_in_user(&harness, PHONE).await;
    let video = harness.backend.insert_video("Intro", None);
    let reactions = ReactionService::new(&harness.ctx);

    reactions.toggle(user, video, like()).await.unwrap();

    let anonymous = reactions.get(None, video).await.unwrap();
    assert_eq!(anonymous.reaction, None);
    assert_eq!(anonymous.like_count, 1);

    let signed_in = reactions.get(Some(user), video).await.unwrap();
    assert_eq!(signed_in.reaction.as_deref(), Some("like"));
}

#[tokio::test]
async fn test_reaction_lookup_on_missing_video_is_not_an_error() {
    let harness = TestHarness::new();
    let reactions = ReactionService::new(&harness.ctx);

    let anonymous = reactions.get(None, 9999).await.unwrap();
    assert_eq!(anonymous.reaction, None);
    assert_eq!(anonymous.like_count, 0);
    assert_eq!(anonymous.dislike_count, 0);
}

#[tokio::test]
async fn test_reacting_to_a_missing_video_fails() {
    let harness = TestHarness::new();
    let user = signed_in_user(&harness, PHONE).await;
    let reactions = ReactionService::new(&harness.ctx);

    let err = reactions
        .toggle(user, 9999, like())
        .await
        .expect_err("missing video");
    assert_eq!(err.status_code(), 404);
}

#[tokio::test]
async fn test_liked_videos_are_listed_newest_first() {
    let harness = TestHarness::new();
    let user = signed_in_user(&harness, PHONE).await;
    let first = harness.backend.insert_video("First", None);
    let second = harness.backend.insert_video("Second", None);
    let reactions = ReactionService::new(&harness.ctx);
    let users = UserService::new(&harness.ctx);

    reactions.toggle(user, first, like()).await.unwrap();
    reactions.toggle(user, second, like()).await.unwrap();
    // A dislike must not appear in the liked list
    let third = harness.backend.insert_video("Third", None);
    reactions.toggle(user, third, dislike()).await.unwrap();

    let liked = users.liked_videos(user).await.unwrap();
    let ids: Vec<i64> = liked.iter().map(|v| v.id).collect();
    assert_eq!(ids.len(), 2);
    assert!(ids.contains(&first));
    assert!(ids.contains(&second));
}

// ============================================================================
// Views
// ============================================================================

#[tokio::test]
async fn test_view_counter_increments() {
    let harness = TestHarness::new();
    let video = harness.backend.insert_video("Intro", None);
    let videos = VideoService::new(&harness.ctx);

    let first = videos.record_view(video).await.unwrap();
    let second = videos.record_view(video).await.unwrap();

    assert_eq!(first.view_count, 1);
    assert_eq!(second.view_count, 2);
}

// ============================================================================
// Playlists
// ============================================================================

#[tokio::test]
async fn test_playlist_create_derives_slug() {
    let harness = TestHarness::new();
    let playlists = PlaylistService::new(&harness.ctx);

    let created = playlists
        .create(CreatePlaylistRequest {
            name: "Rust for Beginners!".to_string(),
            description: None,
            category: Some("rust".to_string()),
            thumbnail_url: None,
            display_order: None,
        })
        .await
        .unwrap();

    assert_eq!(created.slug, "rust-for-beginners");
    assert_eq!(created.category.as_deref(), Some("rust"));
    assert!(created.is_active);
    assert_eq!(created.video_count, 0);
}

#[tokio::test]
async fn test_deactivated_playlist_leaves_public_listings() {
    let harness = TestHarness::new();
    let kept = harness.backend.insert_playlist("Rust", "rust");
    let hidden = harness.backend.insert_playlist("Go", "go");
    let playlists = PlaylistService::new(&harness.ctx);

    playlists
        .update(
            hidden,
            UpdatePlaylistRequest {
                is_active: Some(false),
                ..UpdatePlaylistRequest::default()
            },
        )
        .await
        .unwrap();

    let listed = playlists.list().await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, kept);

    let err = playlists.get_by_slug("go").await.expect_err("hidden slug");
    assert_eq!(err.status_code(), 404);
}

#[tokio::test]
async fn test_duplicate_playlist_slug_conflicts() {
    let harness = TestHarness::new();
    let playlists = PlaylistService::new(&harness.ctx);

    let request = || CreatePlaylistRequest {
        name: "Rust Basics".to_string(),
        description: None,
        category: None,
        thumbnail_url: None,
        display_order: None,
    };
    playlists.create(request()).await.unwrap();

    let err = playlists.create(request()).await.expect_err("same slug");
    assert_eq!(err.status_code(), 409);
}

#[tokio::test]
async fn test_deleting_playlist_detaches_videos() {
    let harness = TestHarness::new();
    let playlist = harness.backend.insert_playlist("Rust", "rust");
    let video = harness.backend.insert_video("Ownership", Some(playlist));
    let playlists = PlaylistService::new(&harness.ctx);
    let videos = VideoService::new(&harness.ctx);

    playlists.delete(playlist).await.unwrap();

    let detached = videos.get(video).await.unwrap();
    assert_eq!(detached.playlist_id, None);
}

#[tokio::test]
async fn test_playlist_by_slug_carries_its_videos() {
    let harness = TestHarness::new();
    let playlist = harness.backend.insert_playlist("Rust", "rust");
    harness.backend.insert_video("Ownership", Some(playlist));
    harness.backend.insert_video("Borrowing", Some(playlist));
    harness.backend.insert_video("Unrelated", None);
    let playlists = PlaylistService::new(&harness.ctx);

    let detail = playlists.get_by_slug("rust").await.unwrap();
    assert_eq!(detail.playlist.id, playlist);
    assert_eq!(detail.playlist.video_count, 2);
    assert_eq!(detail.videos.len(), 2);
}

#[tokio::test]
async fn test_playlist_search_is_case_insensitive() {
    let harness = TestHarness::new();
    harness.backend.insert_playlist("Advanced Rust", "advanced-rust");
    harness.backend.insert_playlist("Rust Basics", "rust-basics");
    harness.backend.insert_playlist("Go Basics", "go-basics");
    let playlists = PlaylistService::new(&harness.ctx);

    let hits = playlists.search("rust").await.unwrap();
    assert_eq!(hits.len(), 2);
    assert_eq!(hits[0].name, "Advanced Rust");
    assert_eq!(hits[1].slug, "rust-basics");
}

#[tokio::test]
async fn test_blank_search_query_is_rejected() {
    let harness = TestHarness::new();
    let playlists = PlaylistService::new(&harness.ctx);

    let err = playlists.search("   ").await.expect_err("blank query");
    assert_eq!(err.status_code(), 400);
}

#[tokio::test]
async fn test_video_can_be_detached_from_playlist() {
    let harness = TestHarness::new();
    let playlist = harness.backend.insert_playlist("Rust", "rust");
    let video = harness.backend.insert_video("Ownership", Some(playlist));
    let videos = VideoService::new(&harness.ctx);

    let updated = videos
        .update(
            video,
            UpdateVideoRequest {
                playlist_id: Some(None),
                ..UpdateVideoRequest::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.playlist_id, None);
}

#[tokio::test]
async fn test_deactivated_video_leaves_public_listings() {
    let harness = TestHarness::new();
    let playlist = harness.backend.insert_playlist("Rust", "rust");
    let kept = harness.backend.insert_video("Ownership", Some(playlist));
    let hidden = harness.backend.insert_video("Borrowing", Some(playlist));
    let playlists = PlaylistService::new(&harness.ctx);
    let videos = VideoService::new(&harness.ctx);

    videos
        .update(
            hidden,
            UpdateVideoRequest {
                is_active: Some(false),
                ..UpdateVideoRequest::default()
            },
        )
        .await
        .unwrap();

    let listed = videos.list(Some(playlist)).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, kept);

    // the playlist's video count only covers active videos
    let detail = playlists.get_by_slug("rust").await.unwrap();
    assert_eq!(detail.playlist.video_count, 1);

    // admins can still fetch it by id
    let fetched = videos.get(hidden).await.unwrap();
    assert!(!fetched.is_active);
}

#[tokio::test]
async fn test_latest_videos_come_newest_first() {
    let harness = TestHarness::new();
    let older = harness.backend.insert_video("First", None);
    let newer = harness.backend.insert_video("Second", None);
    let videos = VideoService::new(&harness.ctx);

    let latest = videos.latest().await.unwrap();
    assert_eq!(latest[0].id, newer);
    assert_eq!(latest[1].id, older);
}

#[tokio::test]
async fn test_video_search_matches_titles() {
    let harness = TestHarness::new();
    harness.backend.insert_video("Ownership in Rust", None);
    harness.backend.insert_video("Garbage Collection", None);
    let videos = VideoService::new(&harness.ctx);

    let found = videos.search("ownership").await.unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].title, "Ownership in Rust");
}

// ============================================================================
// Comments
// ============================================================================

#[tokio::test]
async fn test_comment_body_is_trimmed() {
    let harness = TestHarness::new();
    let user = signed_in_user(&harness, PHONE).await;
    let video = harness.backend.insert_video("Intro", None);
    let comments = CommentService::new(&harness.ctx);

    let created = comments
        .create(
            user,
            video,
            CreateCommentRequest {
                body: "  great video  ".to_string(),
            },
        )
        .await
        .unwrap();

    assert_eq!(created.body, "great video");
}

#[tokio::test]
async fn test_whitespace_only_comment_is_rejected() {
    let harness = TestHarness::new();
    let user = signed_in_user(&harness, PHONE).await;
    let video = harness.backend.insert_video("Intro", None);
    let comments = CommentService::new(&harness.ctx);

    let err = comments
        .create(
            user,
            video,
            CreateCommentRequest {
                body: "   ".to_string(),
            },
        )
        .await
        .expect_err("blank comment");
    assert_eq!(err.status_code(), 400);
}

#[tokio::test]
async fn test_deleting_someone_elses_comment_looks_missing() {
    let harness = TestHarness::new();
    let author = signed_in_user(&harness, "+911111111111").await;
    let intruder = signed_in_user(&harness, "+912222222222").await;
    let video = harness.backend.insert_video("Intro", None);
    let comments = CommentService::new(&harness.ctx);

    let comment = comments
        .create(
            author,
            video,
            CreateCommentRequest {
                body: "mine".to_string(),
            },
        )
        .await
        .unwrap();

    let err = comments
        .delete(intruder, comment.id)
        .await
        .expect_err("not the author");
    assert_eq!(err.status_code(), 404);

    // The author still can
    comments.delete(author, comment.id).await.unwrap();
}

#[tokio::test]
async fn test_comment_count_tracks_additions() {
    let harness = TestHarness::new();
    let user = signed_in_user(&harness, PHONE).await;
    let video = harness.backend.insert_video("Intro", None);
    let comments = CommentService::new(&harness.ctx);

    assert_eq!(comments.count(video).await.unwrap().count, 0);

    comments
        .create(
            user,
            video,
            CreateCommentRequest {
                body: "first".to_string(),
            },
        )
        .await
        .unwrap();

    assert_eq!(comments.count(video).await.unwrap().count, 1);

    let err = comments.count(999).await.expect_err("no such video");
    assert_eq!(err.status_code(), 404);
}

// ============================================================================
// Bookmarks
// ============================================================================

#[tokio::test]
async fn test_bookmark_toggles_on_and_off() {
    let harness = TestHarness::new();
    let user = signed_in_user(&harness, PHONE).await;
    let video = harness.backend.insert_video("Intro", None);
    let bookmarks = BookmarkService::new(&harness.ctx);

    let on = bookmarks.toggle(user, video).await.unwrap();
    assert!(on.bookmarked);
    assert!(bookmarks.check(Some(user), video).await.unwrap().bookmarked);

    let off = bookmarks.toggle(user, video).await.unwrap();
    assert!(!off.bookmarked);
    assert_eq!(bookmarks.list(user).await.unwrap().len(), 0);
}

#[tokio::test]
async fn test_anonymous_bookmark_check_reads_false() {
    let harness = TestHarness::new();
    let user = signed_in_user(&harness, PHONE).await;
    let video = harness.backend.insert_video("Intro", None);
    let bookmarks = BookmarkService::new(&harness.ctx);

    bookmarks.toggle(user, video).await.unwrap();

    // no sign-in required, and someone else's bookmark is invisible
    let anonymous = bookmarks.check(None, video).await.unwrap();
    assert!(!anonymous.bookmarked);
}

#[tokio::test]
async fn test_bookmark_list_names_the_playlist() {
    let harness = TestHarness::new();
    let user = signed_in_user(&harness, PHONE).await;
    let playlist = harness.backend.insert_playlist("Rust", "rust");
    let in_playlist = harness.backend.insert_video("Ownership", Some(playlist));
    let loose = harness.backend.insert_video("Loose", None);
    let bookmarks = BookmarkService::new(&harness.ctx);

    bookmarks.toggle(user, in_playlist).await.unwrap();
    bookmarks.toggle(user, loose).await.unwrap();

    let listed = bookmarks.list(user).await.unwrap();
    assert_eq!(listed.len(), 2);

    let with_playlist = listed.iter().find(|b| b.video_id == in_playlist).unwrap();
    assert_eq!(with_playlist.playlist_name.as_deref(), Some("Rust"));
    assert_eq!(with_playlist.playlist_slug.as_deref(), Some("rust"));

    let without = listed.iter().find(|b| b.video_id == loose).unwrap();
    assert!(without.playlist_name.is_none());
}

// ============================================================================
// Profile
// ============================================================================

#[tokio::test]
async fn test_profile_name_update_round_trips() {
    let harness = TestHarness::new();
    let user = signed_in_user(&harness, PHONE).await;
    let users = UserService::new(&harness.ctx);

    let updated = users
        .update_profile(
            user,
            UpdateProfileRequest {
                name: "  Asha  ".to_string(),
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.name.as_deref(), Some("Asha"));

    let me = users.me(user).await.unwrap();
    assert_eq!(me.name.as_deref(), Some("Asha"));
}

// ============================================================================
// Uploads
// ============================================================================

fn video_file(name: &str, bytes: Vec<u8>) -> MediaFile {
    MediaFile {
        file_name: name.to_string(),
        content_type: "video/mp4".to_string(),
        bytes,
    }
}

#[tokio::test]
async fn test_video_upload_returns_playback_url() {
    let harness = TestHarness::new();
    let uploads = UploadService::new(&harness.ctx);

    let response = uploads
        .upload_video("Intro", video_file("intro.mp4", vec![0u8; 1024]))
        .await
        .unwrap();

    assert!(response.url.contains("playlist.m3u8"));
    assert_eq!(harness.media.stored_videos.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn test_upload_with_wrong_extension_is_rejected() {
    let harness = TestHarness::new();
    let uploads = UploadService::new(&harness.ctx);

    let err = uploads
        .upload_video(
            "Intro",
            MediaFile {
                file_name: "intro.exe".to_string(),
                content_type: "application/octet-stream".to_string(),
                bytes: vec![0u8; 16],
            },
        )
        .await
        .expect_err("bad extension");
    assert_eq!(err.status_code(), 400);
}

#[tokio::test]
async fn test_empty_upload_is_rejected() {
    let harness = TestHarness::new();
    let uploads = UploadService::new(&harness.ctx);

    let err = uploads
        .upload_video("Intro", video_file("intro.mp4", vec![]))
        .await
        .expect_err("empty file");
    assert_eq!(err.status_code(), 400);
}

#[tokio::test]
async fn test_deleting_video_cleans_up_cdn_copy() {
    let harness = TestHarness::new();
    let video = harness.backend.insert_video("Intro", None);
    let videos = VideoService::new(&harness.ctx);

    videos.delete(video).await.unwrap();

    // CDN cleanup is detached; give it a moment
    tokio::time::sleep(std::time::Duration::from_millis(50)).await;
    assert_eq!(harness.media.deleted.lock().unwrap().len(), 1);
}
