use meet_uri::{UrlObject, fix_uri_hier_part, fix_uri_scheme, parse_location_uri, to_url_string};

fn main() {
    let inputs = [
        "org.jitsi.meet://meet.jit.si/Room123",
        "org.jitsi.meet://https://meet.example.com/Room123",
        "org.jitsi.meet:Room123",
        "https://hipchat.com/video/call/myroom?a=1#frag",
        "https://enso.me/meeting/weekly",
        "Room123",
    ];

    for input in inputs {
        let fixed = fix_uri_scheme(input);
        let fixed = fix_uri_hier_part(&fixed);
        println!("{input}");
        println!("  fixed:   {fixed}");

        if let Some(uri) = parse_location_uri(Some(input)) {
            println!("  host:    {:?}", uri.host());
            println!("  room:    {:?}", uri.room());
        }
    }

    // Embedding APIs hand over an object instead of a string
    let object = UrlObject::new("https://meet.example.com/FromConfig");
    let uri = parse_location_uri(to_url_string(Some(&object)).as_deref());
    println!("object room: {:?}", uri.as_ref().and_then(|uri| uri.room()));
}
