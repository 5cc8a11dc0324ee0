/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

#[cfg(test)]
mod test {
    use vkc::v5::{
        ApiMethod, AudioApi, BatchKey, BatchScript, Collect, MAX_EXECUTE_BATCH_SIZE, UsersApi,
        VkError, group_by_key, order_by_key,
    };

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        key: i64,
        n: u32,
    }

    impl BatchKey for Item {
        fn batch_key(&self) -> i64 {
            self.key
        }
    }

    fn item(key: i64, n: u32) -> Item {
        Item { key, n }
    }

    #[test]
    fn users_script() {
        let script = UsersApi::<vkc::v5::ApiClient>::batch_script(&[1, 2, 3]).unwrap();
        let expected = "var ids = [1, 2, 3];
var data = [];
var i = 0;
while (i < ids.length) {
    var response = API.users.get({\"user_ids\": ids[i], \"fields\": \"city,country,counters,bdate,last_seen,home_town,sex,relation,can_see_audio,occupation\"});
    data.push(response[0]);
    i = i + 1;
}
return data;";
        assert_eq!(script.to_string(), expected);
    }

    #[test]
    fn audio_script_concatenates_items() {
        let script = AudioApi::<vkc::v5::ApiClient>::batch_script(&[-10, 20]).unwrap();
        let code = script.to_string();
        assert!(code.starts_with("var ids = [-10, 20];"));
        assert!(code.contains(
            "var response = API.audio.get({\"owner_id\": ids[i], \"count\": 5000, \"need_user\": 0});"
        ));
        assert!(code.contains("if (response) {\n        data = data + response.items;\n    }"));
        assert!(code.ends_with("return data;"));
    }

    #[test]
    fn string_params_are_escaped() {
        let script = BatchScript::new(ApiMethod::UsersGet, "user_ids", &[1], Collect::First)
            .unwrap()
            .param("fields", "a\"}); API.wall.post({\"x");
        assert!(
            script
                .to_string()
                .contains(r#""fields": "a\"}); API.wall.post({\"x""#)
        );
    }

    #[test]
    fn batch_cap_is_enforced() {
        let ids: Vec<i64> = (0..MAX_EXECUTE_BATCH_SIZE as i64).collect();
        assert!(BatchScript::new(ApiMethod::UsersGet, "user_ids", &ids, Collect::First).is_ok());

        let ids: Vec<i64> = (0..=MAX_EXECUTE_BATCH_SIZE as i64).collect();
        assert!(matches!(
            BatchScript::new(ApiMethod::UsersGet, "user_ids", &ids, Collect::First),
            Err(VkError::BatchTooLarge { size: 26, max: 25 })
        ));
    }

    #[test]
    fn ordering_follows_ids_not_reply() {
        let reply = vec![Some(item(3, 0)), Some(item(1, 0)), None, Some(item(2, 0))];
        let ordered = order_by_key(&[1, 2, 3, 4], reply);
        assert_eq!(
            ordered,
            vec![Some(item(1, 0)), Some(item(2, 0)), Some(item(3, 0)), None]
        );
    }

    #[test]
    fn grouping_follows_item_key() {
        let reply = vec![
            item(3, 1),
            item(1, 1),
            item(3, 2),
            item(3, 3),
            item(1, 2),
            item(3, 4),
            item(3, 5),
        ];
        let groups = group_by_key(&[1, 2, 3], reply);
        assert_eq!(groups.len(), 3);
        assert_eq!(groups[&1], vec![item(1, 1), item(1, 2)]);
        assert!(groups[&2].is_empty());
        assert_eq!(
            groups[&3].iter().map(|i| i.n).collect::<Vec<_>>(),
            vec![1, 2, 3, 4, 5]
        );
    }
}
