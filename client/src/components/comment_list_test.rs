use super::*;

fn comment(id: u32, author: &str, text: &str) -> Comment {
    Comment {
        id,
        campsite_id: 0,
        rating: 5,
        text: text.to_owned(),
        author: author.to_owned(),
        date: "2018-10-25T16:30Z".to_owned(),
    }
}

fn render(comments: Option<Vec<Comment>>, post_error: Option<String>) -> String {
    let owner = Owner::new();
    owner.with(|| {
        let post_comment = Callback::new(|_: CommentSubmission| {});
        view! {
            <CommentList
                comments=comments
                campsite_id=0
                post_comment=post_comment
                post_error=Signal::stored(post_error)
            />
        }
        .to_html()
    })
}

#[test]
fn missing_comments_collapse_to_empty_div() {
    let html = render(None, None);
    assert!(html.contains("<div></div>"));
    assert!(!html.contains("Comments"));
    assert!(!html.contains("Submit Comment"));
}

#[test]
fn comments_render_in_received_order() {
    let html = render(
        Some(vec![
            comment(4, "Zed", "Last one in wins"),
            comment(1, "Ada", "Quiet and shady"),
            comment(9, "Grace", "Bring bug spray"),
        ]),
        None,
    );
    let first = html.find("Last one in wins").unwrap();
    let second = html.find("Quiet and shady").unwrap();
    let third = html.find("Bring bug spray").unwrap();
    assert!(first < second && second < third);
    assert!(html.contains("Oct 25, 2018"));
}

#[test]
fn comment_list_shows_heading_and_form_button() {
    let html = render(Some(Vec::new()), None);
    assert!(html.contains("<h4>Comments</h4>"));
    assert!(html.contains("Submit Comment"));
    assert!(!html.contains("We Welcome Feedback"));
}

#[test]
fn post_error_renders_below_comments() {
    let html = render(
        Some(vec![comment(0, "Ada", "Quiet and shady")]),
        Some("Your comment could not be posted. Error: Error 500".to_owned()),
    );
    let entry = html.find("Quiet and shady").unwrap();
    let error = html.find("Your comment could not be posted. Error: Error 500").unwrap();
    assert!(entry < error);
}
