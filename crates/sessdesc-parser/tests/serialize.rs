//! JSON serialization of parsed descriptions (`serde` feature).

#![allow(clippy::unwrap_used)]

use sessdesc_parser::parse;

const SAMPLE: &str = concat!(
    "v=0\r\n",
    "o=jdoe 2890844526 2890842807 IN IP4 10.47.16.5\r\n",
    "s=SDP Seminar\r\n",
    "c=IN IP4 224.2.17.12/127\r\n",
    "b=CT:128\r\n",
    "k=prompt\r\n",
    "a=recvonly\r\n",
    "m=audio 49170 RTP/AVP 0\r\n",
    "c=IN IP6 ff15::101\r\n",
    "m=video 51372 RTP/AVP 99\r\n",
    "a=rtpmap:99 h263-1998/90000\r\n",
);

#[test]
fn test_serialize_json() {
    let desc = parse(SAMPLE.as_bytes()).unwrap();
    let json = serde_json::to_value(&desc).unwrap();

    assert_eq!(json["session"]["protocol"], "0");
    assert_eq!(json["session"]["originator"]["net_type"], "IN");
    assert_eq!(json["session"]["originator"]["addr_type"], "IP4");
    assert_eq!(
        json["session"]["originator"]["session_version"],
        "2890842807"
    );
    assert_eq!(json["session"]["attributes"][0], "recvonly");
    assert_eq!(json["session"]["bandwidth_info"][0], "CT:128");
    assert_eq!(json["session"]["encryption_key"], "prompt");
    assert_eq!(json["session"]["connection_info"][0]["ttl"], 127);
    assert_eq!(json["session"]["connection_info"][0]["addr_range"], 0);
    assert_eq!(json["media"][0]["connection_info"][0]["addr_type"], "IP6");
    assert_eq!(json["media"][0]["connection_info"][0]["ttl"], -1);
    assert_eq!(json["media"][1]["name"], "video 51372 RTP/AVP 99");
    assert_eq!(
        json["media"][1]["attributes"][0],
        "rtpmap:99 h263-1998/90000"
    );
}

#[test]
fn test_serialize_empty_description() {
    let json = serde_json::to_value(parse(b"").unwrap()).unwrap();

    assert_eq!(json["session"]["name"], "");
    assert_eq!(json["session"]["originator"]["net_type"], "IN");
    assert_eq!(json["media"], serde_json::json!([]));
}
